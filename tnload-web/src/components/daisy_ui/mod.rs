pub mod atoms;
pub mod foundation;
pub mod molecules;
pub mod organisms;

pub use foundation::DaisyColor;

pub use atoms::*;
pub use molecules::*;
pub use organisms::*;
