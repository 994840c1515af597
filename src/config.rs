// MPU6050 Step Counter — Tuning & Task Configuration

// ---------------------------------------------------------------------------
// Step detection
// ---------------------------------------------------------------------------
pub const STEP_THRESHOLD: i32 = 1000;    // per-axis delta, raw sensor units
pub const CROSSINGS_PER_STEP: u32 = 2;   // one physical step ≈ two crossings

// ---------------------------------------------------------------------------
// Sampler task
// ---------------------------------------------------------------------------
pub const SAMPLE_INTERVAL_MS: u64 = 800; // polling cadence
pub const SAMPLER_TASK_NAME: &str = "sampler";
pub const STACK_SAMPLER: usize = 4096;
