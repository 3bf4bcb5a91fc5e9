//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像解码与编码、文本转码，调用核心隐写算法并向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, RECOVERED_PREFIX};
use crate::error::StegoError;
use crate::raster::capacity_bits;
use crate::steganography::{hide_message, max_message_len, reveal_message};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 读取图像 (转换为 RGB，丢弃透明通道) 与文本文件，把文本连同结束标记写入像素最低位，
/// 最后以 PNG 格式保存结果图像。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取或解码输入图像，或文本文件不是合法的 UTF-8。
/// * 图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_output_path(&args.image, DOCTORED_PREFIX, "png"));
    ensure_writable(&dest, args.force)?;

    let mut picture = load_rgb(&args.image)?;

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file as UTF-8: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let written = match hide_message(&mut picture, text.as_bytes()) {
        Ok(written) => written,
        Err(StegoError::CapacityExceeded {
            required,
            available,
        }) => anyhow::bail!(
            "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        Err(e) => return Err(e).context("Failed to hide the text in the image."),
    };

    picture
        .save_with_format(&dest, ImageFormat::Png)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                dest.to_string_lossy().red().bold()
            )
        })?;

    info!("hid {} bytes in {}", text.len(), dest.display());
    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Used {} of {} available bits.",
        written.to_string().green().bold(),
        capacity_bits(&picture).to_string().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 读取隐写图像，扫描全部像素最低位并截取结束标记之前的数据，
/// 将其按 UTF-8 解码后写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取或解码输入图像。
/// * 图像中找不到结束标记。
/// * 恢复出的数据不是合法的 UTF-8。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .unwrap_or_else(|| default_output_path(&args.image, RECOVERED_PREFIX, "txt"));
    ensure_writable(&dest, args.force)?;

    let picture = load_rgb(&args.image)?;

    let data = reveal_message(&picture).with_context(|| {
        format!(
            "Failed to recover a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    debug!("recovered {} bytes", data.len());

    let text = String::from_utf8(data).with_context(|| {
        format!(
            "The data recovered from '{}' is not valid UTF-8 text.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：报告图像可容纳的比特数与最长消息字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = load_rgb(&args.image)?;

    println!(
        "{}: {}x{} pixels, {} bits, up to {} bytes of text.",
        args.image.to_string_lossy().bold(),
        picture.width(),
        picture.height(),
        capacity_bits(&picture).to_string().green().bold(),
        max_message_len(&picture).to_string().green().bold()
    );
    Ok(())
}

/// 打开任意受支持格式的图像并转换为 8 位 RGB 栅格。
fn load_rgb(path: &Path) -> Result<RgbImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(picture.to_rgb8())
}

/// 以输入文件所在目录为基准生成 `<prefix><stem>.<extension>`。
fn default_output_path(input: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{stem}.{extension}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
