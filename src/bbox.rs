use image::RgbaImage;

/// Smallest rectangle enclosing every pixel with alpha above zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bbox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Returns `None` when the image has no pixel with alpha > 0.
pub fn alpha_bbox(img: &RgbaImage) -> Option<Bbox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut seen = false;

    for (x, y, px) in img.enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        seen = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    seen.then(|| Bbox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crops to the alpha bounding box. A fully transparent image has no box and
/// comes back unchanged, so its original dimensions drive later sizing.
pub fn trim_transparent_border(img: &RgbaImage) -> RgbaImage {
    match alpha_bbox(img) {
        Some(b) => image::imageops::crop_imm(img, b.x, b.y, b.width, b.height).to_image(),
        None => img.clone(),
    }
}
