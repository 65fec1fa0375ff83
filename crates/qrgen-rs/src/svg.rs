use crate::symbol::QrSymbol;

/// Serializes the symbol as a standalone SVG document string.
///
/// The image is monochrome: a white background rectangle and one black
/// path covering every dark module as a unit square. `border` is the width
/// of the quiet zone in modules, so the `viewBox` spans
/// `size + 2 * border` units on each side.
pub fn to_svg_string(symbol: &QrSymbol, border: u32) -> String {
    let dimension = u64::from(symbol.size() as u32) + 2 * u64::from(border);
    let mut path = String::new();
    for y in 0..symbol.size() {
        for x in 0..symbol.size() {
            if symbol.get_module(x, y) {
                if !path.is_empty() {
                    path.push(' ');
                }
                path.push_str(&format!(
                    "M{},{}h1v1h-1z",
                    i64::from(x) + i64::from(border),
                    i64::from(y) + i64::from(border)
                ));
            }
        }
    }
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {dimension} {dimension}" stroke="none">
    <rect width="100%" height="100%" fill="#FFFFFF"/>
    <path d="{path}" fill="#000000"/>
</svg>
"##
    )
}
