mod kahan_sum;
pub use kahan_sum::KahanSummation;
