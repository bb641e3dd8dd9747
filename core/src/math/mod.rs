pub mod interp;
pub mod quadrature;

pub use interp::InterpHelper;
pub use quadrature::QuadratureHelper;
