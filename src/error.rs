//! # 错误类型模块
//!
//! 隐写核心可能产生的全部错误。均为结构性错误，重试没有意义。

use thiserror::Error;

/// 嵌入或提取过程中发生的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// 有效载荷所需比特数超过栅格容量。发生时栅格未被修改。
    #[error("payload needs {required} bits but the image only holds {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 扫描完整个栅格后仍未找到结束标记。
    #[error("end marker not found in the image data")]
    MarkerNotFound,
}
