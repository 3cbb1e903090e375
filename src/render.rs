use crate::config::Config;
use crate::error::{Error, Result};
use crate::layout::{DrawNode, Layout};
use crate::raster::{PixelBuffer, draw_arrow, draw_text, fill_rect};
use crate::theme::{Palette, Theme};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Gap between a branch box's bottom edge and the start of its arrow.
const ARROW_OFFSET: i32 = 2;

/// Allocates a canvas in the theme background and paints `layout` onto it.
pub fn render_to_buffer(layout: &Layout, theme: &Theme, config: &Config) -> Result<PixelBuffer> {
    let palette = theme.palette()?;
    let mut buf = PixelBuffer::new(layout.canvas_width, layout.canvas_height, palette.background)?;
    render_tree(&mut buf, &layout.root, &palette, config);
    debug!(
        width = buf.width(),
        height = buf.height(),
        nodes = layout.node_count,
        "composited tree"
    );
    Ok(buf)
}

/// Paints `node` and its subtree: the box, its label, and for branches an arrow down to
/// the child row.
pub fn render_tree(buf: &mut PixelBuffer, node: &DrawNode, palette: &Palette, config: &Config) {
    let scale = config.layout.scale;
    let padding = config.layout.padding;

    fill_rect(buf, node.x, node.y, node.width, node.height, node.color);
    draw_text(
        buf,
        node.x.saturating_add(padding),
        node.y.saturating_add(padding),
        &node.name,
        scale,
        palette.text,
    );

    if node.is_branch() {
        // Empty branches have no row to aim at; use the configured step.
        let child_row = node.children.first().map_or_else(
            || {
                node.bottom()
                    .saturating_add(config.layout.arrow_length)
                    .saturating_add(config.layout.vertical_gap)
            },
            |child| child.y,
        );
        let x = node.center_x();
        draw_arrow(
            buf,
            x,
            node.bottom().saturating_add(ARROW_OFFSET),
            x,
            child_row.saturating_sub(ARROW_OFFSET),
            palette.line,
        );
    }

    for child in &node.children {
        render_tree(buf, child, palette, config);
    }
}

/// Sink for a finished RGB canvas.
pub trait ImageEncoder {
    fn encode(
        &self,
        width: u32,
        height: u32,
        channels: usize,
        data: &[u8],
        row_stride: usize,
    ) -> Result<()>;
}

/// Hands `buf` to `encoder`. Failures are logged and returned as
/// [`Error::EncodeFailure`].
pub fn write_image(buf: &PixelBuffer, encoder: &dyn ImageEncoder) -> Result<()> {
    let result = encoder.encode(
        buf.width(),
        buf.height(),
        PixelBuffer::CHANNELS,
        buf.as_bytes(),
        buf.row_stride(),
    );
    if let Err(err) = result {
        warn!(error = %err, "image encoder failed");
        return Err(match err {
            err @ Error::EncodeFailure(_) => err,
            other => Error::EncodeFailure(other.to_string()),
        });
    }
    Ok(())
}

/// Writes PNG files through tiny-skia.
#[derive(Debug, Clone)]
pub struct PngEncoder {
    path: PathBuf,
}

impl PngEncoder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "png")]
impl ImageEncoder for PngEncoder {
    fn encode(
        &self,
        width: u32,
        height: u32,
        channels: usize,
        data: &[u8],
        row_stride: usize,
    ) -> Result<()> {
        use resvg::tiny_skia::Pixmap;

        if channels != PixelBuffer::CHANNELS {
            return Err(Error::EncodeFailure(format!(
                "expected {} channels, got {channels}",
                PixelBuffer::CHANNELS
            )));
        }
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::EncodeFailure(format!("cannot allocate {width}x{height} pixmap")))?;
        let row_bytes = width as usize * channels;
        let rgba = pixmap.data_mut();
        for (row, out) in data
            .chunks(row_stride)
            .zip(rgba.chunks_exact_mut(width as usize * 4))
        {
            for (px, dst) in row[..row_bytes].chunks_exact(channels).zip(out.chunks_exact_mut(4)) {
                dst.copy_from_slice(&[px[0], px[1], px[2], 0xFF]);
            }
        }
        pixmap
            .save_png(&self.path)
            .map_err(|err| Error::EncodeFailure(format!("{}: {err}", self.path.display())))
    }
}

#[cfg(not(feature = "png"))]
impl ImageEncoder for PngEncoder {
    fn encode(&self, _: u32, _: u32, _: usize, _: &[u8], _: usize) -> Result<()> {
        Err(Error::EncodeFailure(
            "PNG output requires the `png` feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::theme::Color;
    use crate::tree::TreeNode;
    use std::cell::RefCell;

    fn sample() -> (Layout, Config) {
        let tree = TreeNode::branch("A")
            .with_child(TreeNode::leaf("BB"))
            .with_child(TreeNode::leaf("CCC"));
        let mut config = Config::default();
        config.canvas.width = 128;
        config.canvas.height = 128;
        config.layout.gap = 5;
        let layout = compute_layout(&tree, &config.theme, &config).unwrap();
        (layout, config)
    }

    #[test]
    fn paints_boxes_labels_and_arrow() {
        let (layout, config) = sample();
        let buf = render_to_buffer(&layout, &config.theme, &config).unwrap();
        let root = &layout.root;

        // Box corner keeps its fill; the padding band never holds ink.
        assert_eq!(buf.pixel(root.x, root.y), Some(Color(0xFF0000)));
        let leaf = &root.children[0];
        assert_eq!(buf.pixel(leaf.x, leaf.y), Some(Color(0xFFFF00)));

        // Arrow shaft runs down the centre line between the rows.
        let x = root.center_x();
        for y in root.bottom() + 2..=leaf.y - 2 {
            assert_eq!(buf.pixel(x, y), Some(Color::BLACK), "shaft at y={y}");
        }
        assert_eq!(buf.pixel(x, root.bottom() + 1), Some(Color::WHITE));
        assert!(buf.count(Color::BLACK) > 0);
    }

    #[test]
    fn arrow_reaches_the_laid_out_child_row() {
        let (layout, mut config) = sample();
        config.layout.arrow_length = 0;
        config.layout.vertical_gap = 0;
        let buf = render_to_buffer(&layout, &config.theme, &config).unwrap();
        let root = &layout.root;
        let x = root.center_x();
        let tip = root.children[0].y - 2;
        assert!(tip > root.bottom() + 2);
        for y in root.bottom() + 2..=tip {
            assert_eq!(buf.pixel(x, y), Some(Color::BLACK), "shaft at y={y}");
        }
    }

    #[test]
    fn empty_branch_arrow_uses_configured_step() {
        let config = Config::default();
        let layout = compute_layout(&TreeNode::branch("empty"), &config.theme, &config).unwrap();
        let buf = render_to_buffer(&layout, &config.theme, &config).unwrap();
        let root = &layout.root;
        let tip = root.bottom() + config.layout.arrow_length + config.layout.vertical_gap - 2;
        assert_eq!(buf.pixel(root.center_x(), tip), Some(Color::BLACK));
        assert_eq!(buf.pixel(root.center_x(), tip + 1), Some(Color::WHITE));
    }

    #[test]
    fn label_ink_stays_inside_box() {
        let (layout, config) = sample();
        let buf = render_to_buffer(&layout, &config.theme, &config).unwrap();
        let leaf = &layout.root.children[1];
        let mut ink = 0;
        for y in leaf.y..leaf.bottom() {
            for x in leaf.x..leaf.right() {
                if buf.pixel(x, y) == Some(Color::BLACK) {
                    ink += 1;
                    assert!(x >= leaf.x + 3 && x < leaf.right() - 3);
                    assert!(y >= leaf.y + 3 && y < leaf.bottom() - 3);
                }
            }
        }
        assert!(ink > 0);
    }

    #[test]
    fn leaves_get_no_arrow() {
        let tree = TreeNode::leaf("solo");
        let config = Config::default();
        let layout = compute_layout(&tree, &config.theme, &config).unwrap();
        let buf = render_to_buffer(&layout, &config.theme, &config).unwrap();
        let below = layout.root.bottom() + 5;
        assert_eq!(buf.pixel(layout.root.center_x(), below), Some(Color::WHITE));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (layout, config) = sample();
        let a = render_to_buffer(&layout, &config.theme, &config).unwrap();
        let b = render_to_buffer(&layout, &config.theme, &config).unwrap();
        assert_eq!(a, b);
    }

    struct RecordingEncoder {
        calls: RefCell<Vec<(u32, u32, usize, usize, usize)>>,
        fail: bool,
    }

    impl ImageEncoder for RecordingEncoder {
        fn encode(
            &self,
            width: u32,
            height: u32,
            channels: usize,
            data: &[u8],
            row_stride: usize,
        ) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((width, height, channels, data.len(), row_stride));
            if self.fail {
                return Err(Error::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    #[test]
    fn write_image_passes_raw_rgb() {
        let buf = PixelBuffer::new(4, 2, Color::WHITE).unwrap();
        let encoder = RecordingEncoder {
            calls: RefCell::new(Vec::new()),
            fail: false,
        };
        write_image(&buf, &encoder).unwrap();
        assert_eq!(encoder.calls.borrow().as_slice(), &[(4, 2, 3, 24, 12)]);
    }

    #[test]
    fn encoder_failure_becomes_encode_failure() {
        let buf = PixelBuffer::new(1, 1, Color::WHITE).unwrap();
        let encoder = RecordingEncoder {
            calls: RefCell::new(Vec::new()),
            fail: true,
        };
        let err = write_image(&buf, &encoder).unwrap_err();
        assert!(matches!(err, Error::EncodeFailure(ref msg) if msg.contains("disk full")));
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_encoder_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.png");
        let (layout, config) = sample();
        let buf = render_to_buffer(&layout, &config.theme, &config).unwrap();
        write_image(&buf, &PngEncoder::new(&path)).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_encoder_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tree.png");
        let buf = PixelBuffer::new(2, 2, Color::WHITE).unwrap();
        assert!(matches!(
            write_image(&buf, &PngEncoder::new(path)),
            Err(Error::EncodeFailure(_))
        ));
    }
}
