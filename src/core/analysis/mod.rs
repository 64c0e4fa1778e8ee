mod edge_filter;
mod grayscale;
mod quality_decision;
mod sharpness_scorer;
mod validation_gate;

pub use edge_filter::laplacian;
pub use grayscale::to_grayscale;
pub use quality_decision::decide;
pub use sharpness_scorer::score;
pub use validation_gate::validate;
