use image::RgbaImage;

use crate::error::FavsquareResult;

pub type Rgba8 = [u8; 4];

/// Straight-alpha `src` over an opaque `dst` pixel. The result stays opaque.
pub fn over_opaque(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2], 255];
    }

    let inv = 255u16 - sa;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), sa);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out[3] = 255;
    out
}

/// Blends `src` onto `canvas` at the given offset, pixel by pixel.
pub fn blit_over(
    canvas: &mut RgbaImage,
    src: &RgbaImage,
    offset_x: u32,
    offset_y: u32,
) -> FavsquareResult<()> {
    let fits_x = offset_x
        .checked_add(src.width())
        .is_some_and(|end| end <= canvas.width());
    let fits_y = offset_y
        .checked_add(src.height())
        .is_some_and(|end| end <= canvas.height());
    if !fits_x || !fits_y {
        return Err(crate::FavsquareError::geometry(
            "blit_over expects the source footprint to fit inside the canvas",
        ));
    }

    for (x, y, px) in src.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(offset_x + x, offset_y + y);
        dst.0 = over_opaque(dst.0, px.0);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}
