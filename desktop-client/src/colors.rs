use common::games::snake::StyleToken;
use eframe::egui;

/// CIE L*a*b* triple (D50 white point).
pub type Lab = [f32; 3];

#[rustfmt::skip]
pub const COLOUR_SCHEMES: [&[Lab]; 10] = [
    &[[46.0, 74.0, 1.0], [46.0, 74.0, 1.0], [45.0, 43.0, -26.0], [29.0, 32.0, -64.0], [29.0, 32.0, -64.0]],
    &[[53.0, 80.0, 67.0], [75.0, 24.0, 79.0], [97.0, -22.0, 94.0], [46.0, -52.0, 50.0], [30.0, 59.0, -36.0]],
    &[[77.0, -13.0, 72.0], [82.0, 0.0, 0.0], [41.0, 41.0, -43.0], [13.0, 0.0, 0.0]],
    &[[64.0, -17.0, -25.0], [63.0, 24.0, 3.0], [82.0, 0.0, 0.0], [63.0, 24.0, 3.0], [64.0, -17.0, -25.0]],
    &[[62.0, 39.0, -40.0], [100.0, 0.0, 0.0], [48.0, -35.0, 45.0]],
    &[[67.0, 57.0, 1.0], [47.0, 80.0, -59.0], [16.0, 0.0, 0.0], [33.0, 41.0, -70.0]],
    &[[76.0, 0.0, 0.0], [100.0, 0.0, 0.0], [90.0, -37.0, 48.0], [100.0, 0.0, 0.0], [76.0, 0.0, 0.0]],
    &[[65.0, 51.0, 7.0], [76.0, 31.0, 1.0], [83.0, 0.0, 0.0], [84.0, -23.0, -20.0], [77.0, -23.0, -33.0], [95.0, -10.0, 50.0]],
    &[[0.0, 0.0, 0.0], [68.0, 0.0, 0.0], [100.0, 0.0, 0.0], [30.0, 59.0, -36.0]],
    &[[56.0, 83.0, -2.0], [87.0, -3.0, 87.0], [69.0, -10.0, -48.0]],
];

const PLAIN_FOOD: Lab = [56.0, 83.0, 6.0];

pub fn scheme_count() -> usize {
    COLOUR_SCHEMES.len()
}

/// Unknown tokens fall back to the first scheme.
pub fn scheme(token: StyleToken) -> &'static [Lab] {
    COLOUR_SCHEMES.get(token.0).copied().unwrap_or(COLOUR_SCHEMES[0])
}

pub fn lab_to_color(lab: Lab, alpha: u8) -> egui::Color32 {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let f_inv = |t: f32| {
        let cube = t * t * t;
        if cube > 0.008856 { cube } else { (116.0 * t - 16.0) / 903.3 }
    };
    let x = 0.9642 * f_inv(fx);
    let y = if l > 8.0 { fy * fy * fy } else { l / 903.3 };
    let z = 0.8251 * f_inv(fz);

    // Bradford-adapted D50 XYZ to linear sRGB
    let r = 3.133_856 * x - 1.616_867 * y - 0.490_615 * z;
    let g = -0.978_768 * x + 1.916_142 * y + 0.033_454 * z;
    let bl = 0.071_945 * x - 0.228_991 * y + 1.405_243 * z;

    egui::Color32::from_rgba_unmultiplied(encode(r), encode(g), encode(bl), alpha)
}

fn encode(linear: f32) -> u8 {
    let linear = linear.clamp(0.0, 1.0);
    let value = if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (value * 255.0).round() as u8
}

/// Colour of segment `index` (0 = head) on a snake of `len` segments,
/// blending across the scheme's stops from head to tail.
pub fn segment_colour(scheme: &[Lab], index: usize, len: usize) -> egui::Color32 {
    lab_to_color(segment_lab(scheme, index, len), 255)
}

fn segment_lab(scheme: &[Lab], index: usize, len: usize) -> Lab {
    let last_stop = scheme.len().saturating_sub(1);
    if last_stop == 0 || len < 2 {
        return scheme.first().copied().unwrap_or(PLAIN_FOOD);
    }

    let position = (index as f32 / (len - 1) as f32 * last_stop as f32).min(last_stop as f32);
    let from = scheme[position.floor() as usize];
    let to = scheme[position.ceil() as usize];
    let mix = position.fract();

    [
        from[0] + (to[0] - from[0]) * mix,
        from[1] + (to[1] - from[1]) * mix,
        from[2] + (to[2] - from[2]) * mix,
    ]
}

/// Dark outline in the hue of the scheme's tail stop.
pub fn outline_colour(scheme: &[Lab]) -> egui::Color32 {
    let [_, a, b] = scheme.last().copied().unwrap_or(PLAIN_FOOD);
    lab_to_color([25.0, a, b], 255)
}

pub fn food_colour(style: Option<StyleToken>) -> egui::Color32 {
    match style {
        Some(token) => lab_to_color(scheme(token)[0], 255),
        None => lab_to_color(PLAIN_FOOD, 230),
    }
}

pub fn background_colour(scheme: &[Lab]) -> egui::Color32 {
    let [_, a, b] = scheme.last().copied().unwrap_or(PLAIN_FOOD);
    lab_to_color([8.0, a / 4.0, b / 4.0], 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: egui::Color32, expected: [u8; 3]) {
        let [r, g, b, _] = actual.to_array();
        for (got, want) in [r, g, b].into_iter().zip(expected) {
            assert!(got.abs_diff(want) <= 1, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_white_and_black() {
        assert_close(lab_to_color([100.0, 0.0, 0.0], 255), [255, 255, 255]);
        assert_close(lab_to_color([0.0, 0.0, 0.0], 255), [0, 0, 0]);
    }

    #[test]
    fn test_mid_grey_is_neutral() {
        let [r, g, b, _] = lab_to_color([50.0, 0.0, 0.0], 255).to_array();
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
        assert!((110..=125).contains(&r));
    }

    #[test]
    fn test_segment_colour_hits_end_stops() {
        let scheme = COLOUR_SCHEMES[4];
        assert_eq!(segment_lab(scheme, 0, 9), scheme[0]);
        assert_eq!(segment_lab(scheme, 8, 9), scheme[2]);
        assert_eq!(segment_lab(scheme, 4, 9), scheme[1]);
    }

    #[test]
    fn test_segment_colour_blends_between_stops() {
        let scheme: &[Lab] = &[[0.0, 0.0, 0.0], [100.0, 40.0, -20.0]];
        assert_eq!(segment_lab(scheme, 1, 3), [50.0, 20.0, -10.0]);
    }

    #[test]
    fn test_short_snake_uses_first_stop() {
        let scheme = COLOUR_SCHEMES[1];
        assert_eq!(segment_lab(scheme, 0, 1), scheme[0]);
    }

    #[test]
    fn test_unknown_token_falls_back() {
        assert_eq!(scheme(StyleToken(99)), COLOUR_SCHEMES[0]);
        assert_eq!(scheme_count(), 10);
    }
}
