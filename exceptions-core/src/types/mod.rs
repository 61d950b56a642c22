//! 类型定义模块

mod item;
mod state;

pub use item::ExceptionsItem;
pub use state::ExceptionsFragmentState;
