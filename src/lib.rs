//! # lsb_marker 库
//!
//! 本库包含基于结束标记的 LSB 隐写工具的核心逻辑：
//! 位编解码 (`bits`)、RGB 栅格抽象 (`raster`) 以及通道最低位的嵌入与提取 (`steganography`)。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod raster;
pub mod steganography;
