use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use log::debug;
use ndarray::{Array4, ArrayViewMut3, Axis};

use crate::{
    config::{ChannelOrder, Config},
    error::ChessEyeError,
    squares::{NUM_SQUARES, image_cell, traversal},
};

/// Decode PNG or JPEG bytes and resize them to the configured board size.
///
/// The photograph is stretched to a square regardless of its aspect ratio;
/// cropping the board out of a larger scene is the caller's job.
pub fn decode_board_image(bytes: &[u8], config: &Config) -> Result<RgbImage, ChessEyeError> {
    let format = image::guess_format(bytes)?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(ChessEyeError::UnsupportedFormat(format!("{format:?}")));
    }
    let img = image::load_from_memory_with_format(bytes, format)?;
    Ok(normalize_board_image(img, config))
}

/// Resize an already decoded image to `board_size × board_size` RGB.
pub fn normalize_board_image(img: DynamicImage, config: &Config) -> RgbImage {
    let size = config.board_size;
    let (width, height) = img.dimensions();
    if (width, height) == (size, size) {
        return img.into_rgb8();
    }
    debug!("resizing {width}x{height} photograph to {size}x{size}");
    img.resize_exact(size, size, config.resize_filter.into())
        .into_rgb8()
}

/// Cut a square board image into 64 cells, in traversal order.
///
/// The result has shape `[64, S/8, S/8, 3]` (NHWC) with channel values
/// scaled to `[0, 1]`. Channels are written in `channel_order`.
pub fn extract_squares(
    image: &RgbImage,
    channel_order: ChannelOrder,
) -> Result<Array4<f32>, ChessEyeError> {
    let (width, height) = image.dimensions();
    if width != height || width == 0 || width % 8 != 0 {
        return Err(ChessEyeError::InvalidImageDimensions { width, height });
    }
    let cell = (width / 8) as usize;

    let mut squares = Array4::<f32>::zeros((NUM_SQUARES, cell, cell, 3));
    for (i, square) in traversal().enumerate() {
        let (row, column) = image_cell(square);
        copy_cell(
            image,
            row * cell,
            column * cell,
            channel_order,
            squares.index_axis_mut(Axis(0), i),
        );
    }
    Ok(squares)
}

fn copy_cell(
    image: &RgbImage,
    top: usize,
    left: usize,
    channel_order: ChannelOrder,
    mut cell: ArrayViewMut3<f32>,
) {
    let size = cell.shape()[0];
    for y in 0..size {
        for x in 0..size {
            let [r, g, b] = image.get_pixel((left + x) as u32, (top + y) as u32).0;
            let pixel = match channel_order {
                ChannelOrder::Rgb => [r, g, b],
                ChannelOrder::Bgr => [b, g, r],
            };
            for (c, value) in pixel.into_iter().enumerate() {
                cell[[y, x, c]] = value as f32 / 255.0;
            }
        }
    }
}
