//! Contract between feature placement code and rendering backends.

use glam::DVec3;

use crate::texture::TextureDescriptor;

/// Drawing operations a rendering backend offers to feature placement code.
///
/// Upstream placement logic (e.g. assembling a group of signs on a shared
/// post) draws through this trait. This crate only defines the contract: it
/// supplies the texture coordinates and composited rasters such a backend
/// consumes, but ships no backend of its own.
pub trait RenderTarget {
    /// Draw a vertical column: a cylinder or truncated cone based at `base`,
    /// extending `height` upward, with separate bottom and top radii and
    /// optionally capped ends.
    #[allow(clippy::too_many_arguments)]
    fn draw_column(
        &mut self,
        material: &TextureDescriptor,
        base: DVec3,
        height: f64,
        radius_bottom: f64,
        radius_top: f64,
        draw_bottom: bool,
        draw_top: bool,
    );

    /// Draw a positioned instance of a named model, facing `direction`
    /// (azimuth in radians), with optional per-instance size overrides.
    fn draw_model(
        &mut self,
        model: &str,
        position: DVec3,
        direction: f64,
        height: Option<f64>,
        width: Option<f64>,
    );
}
