//! 领域层
//!
//! 摘要描述符值对象

mod descriptor;

pub use descriptor::Descriptor;
