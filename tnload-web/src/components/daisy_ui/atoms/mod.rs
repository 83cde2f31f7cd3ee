pub mod alert;
pub mod input;
pub mod label;
pub mod select;
pub mod skeleton;

pub use alert::{Alert, AlertProps};
pub use input::{Input, InputProps};
pub use label::{Label, LabelProps};
pub use select::{Select, SelectOption, SelectProps};
pub use skeleton::{Skeleton, SkeletonProps};
