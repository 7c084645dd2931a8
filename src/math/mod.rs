pub mod spline;
pub mod utils;

// Re-exports für einfache Verwendung
pub use spline::ProfileInterpolator;
