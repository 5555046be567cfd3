//! Initial Layout - starting grid of icon bodies
//!
//! Pure function of the viewport and the ordered asset list, used for the
//! first frame and for every reset.

use crate::domain::assets::IconAsset;
use crate::rigid_body::{RigidBody, Vec2};

/// Icons are this fraction of the smaller viewport side across.
pub const ICON_SIZE_FRACTION: f64 = 0.15;
pub const LAYOUT_COLUMNS: usize = 3;

/// Place one resting body per asset on a three-column grid.
pub fn create_initial_layout(width: f64, height: f64, assets: &[IconAsset]) -> Vec<RigidBody> {
    let radius = width.min(height) * ICON_SIZE_FRACTION / 2.0;
    let cols = LAYOUT_COLUMNS;
    let rows = assets.len().div_ceil(cols);

    let horizontal_spacing = width / (cols + 1) as f64;
    let vertical_spacing = height / (rows + 2) as f64;

    assets
        .iter()
        .enumerate()
        .map(|(index, asset)| {
            let col = index % cols;
            let row = index / cols;
            let position = Vec2::new(
                horizontal_spacing * (col + 1) as f64,
                vertical_spacing * (row as f64 + 1.5),
            );
            RigidBody::icon(asset.id.clone(), position, radius)
        })
        .collect()
}
