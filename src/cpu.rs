use crate::batch::BatchConfig;

#[derive(Debug, Clone)]
pub struct CpuFeatures {
    pub has_avx2: bool,
    pub has_avx512f: bool,
    pub threads: usize,
}

impl CpuFeatures {
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        let (has_avx2, has_avx512f) = (
            is_x86_feature_detected!("avx2"),
            is_x86_feature_detected!("avx512f"),
        );

        #[cfg(not(target_arch = "x86_64"))]
        let (has_avx2, has_avx512f) = (false, false);

        #[cfg(feature = "parallel")]
        let threads = rayon::current_num_threads();
        #[cfg(not(feature = "parallel"))]
        let threads = 1;

        Self {
            has_avx2,
            has_avx512f,
            threads,
        }
    }

    pub fn print_summary(&self) {
        println!("CPU features:");
        println!("  AVX2: {}", if self.has_avx2 { "yes" } else { "no" });
        println!("  AVX512F: {}", if self.has_avx512f { "yes" } else { "no" });
        println!("  worker threads: {}", self.threads);
    }

    /// Vector batches are cheap per key, so they need bigger inputs before
    /// splitting across threads pays off.
    pub fn optimal_batch_config(&self) -> BatchConfig {
        let chunk_size = if self.has_avx2 { 16 * 1024 } else { 4 * 1024 };
        BatchConfig {
            parallel_threshold: chunk_size * self.threads.max(2),
            chunk_size,
        }
    }
}

pub fn detect_features() -> CpuFeatures {
    CpuFeatures::detect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_config_splits_only_past_one_chunk() {
        let cfg = detect_features().optimal_batch_config();
        assert!(cfg.chunk_size > 0);
        assert!(cfg.parallel_threshold >= 2 * cfg.chunk_size);
        assert_eq!(BatchConfig::default(), cfg);
    }
}
