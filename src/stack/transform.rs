use crate::{
    foundation::{core::Affine, math::round_to},
    surface::handle::ItemStyle,
};

/// Visual transform of one item. The cached copy is the last one actually committed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackTransform {
    /// Vertical offset from the layout position (px).
    pub translate_y: f64,
    /// Uniform scale about the top-center.
    pub scale: f64,
    /// Rotation (degrees).
    pub rotation: f64,
    /// Blur radius (px).
    pub blur: f64,
    /// Stacking order.
    pub z_index: i32,
}

impl StackTransform {
    /// Rounded to 2 decimals (translate/rotation/blur) and 3 (scale) for stable comparison.
    pub fn rounded(self) -> Self {
        Self {
            translate_y: round_to(self.translate_y, 2),
            scale: round_to(self.scale, 3),
            rotation: round_to(self.rotation, 2),
            blur: round_to(self.blur, 2),
            z_index: self.z_index,
        }
    }

    /// Matrix in item-local space with the pivot (top-center) at the origin.
    ///
    /// Order: translate, then rotate, then scale.
    pub fn to_affine(self) -> Affine {
        Affine::translate((0.0, self.translate_y))
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale(self.scale)
    }

    /// Render the committed style strings.
    pub fn to_style(self) -> ItemStyle {
        let filter = if self.blur > 0.0 {
            format!("blur({}px)", self.blur)
        } else {
            String::new()
        };
        ItemStyle {
            transform: format!(
                "translate3d(0, {}px, 0) scale({}) rotate({}deg)",
                self.translate_y, self.scale, self.rotation
            ),
            filter,
            z_index: self.z_index,
            matrix: self.to_affine(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/transform.rs"]
mod tests;
