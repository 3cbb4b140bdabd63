//! Defines traits for processing categorized PDF content stream operators.
//! Implementors of these traits can define how to handle specific groups of
//! PDF drawing, text, and state commands, allowing for different backends
//! (e.g., renderers, text extractors) to selectively implement functionality.

use std::rc::Rc;

use pdf_object::dictionary::Dictionary;

use crate::{
    TextElement,
    graphics_state_operators::{LineCap, LineJoin},
    text_state_operators::TextRenderingMode,
};

pub trait PdfOperatorBackendError {
    /// The error type that can be returned by operator handling methods.
    type ErrorType;
}

/// Defines methods for handling PDF path construction operators.
///
/// These operators are used to define shapes and paths before they are painted.
pub trait PathConstructionOps: PdfOperatorBackendError {
    /// Moves the current point to `(x, y)`, starting a new subpath.
    fn move_to(&mut self, x: f32, y: f32) -> Result<(), Self::ErrorType>;

    /// Appends a straight line segment from the current point to `(x, y)`.
    fn line_to(&mut self, x: f32, y: f32) -> Result<(), Self::ErrorType>;

    /// Appends a cubic Bezier curve from the current point to `(x3, y3)`,
    /// using `(x1, y1)` and `(x2, y2)` as control points.
    fn curve_to(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
    ) -> Result<(), Self::ErrorType>;

    /// Appends a cubic Bezier curve where the current point is the first
    /// control point.
    fn curve_to_v(&mut self, x2: f32, y2: f32, x3: f32, y3: f32) -> Result<(), Self::ErrorType>;

    /// Appends a cubic Bezier curve where the endpoint is also the second
    /// control point.
    fn curve_to_y(&mut self, x1: f32, y1: f32, x3: f32, y3: f32) -> Result<(), Self::ErrorType>;

    /// Closes the current subpath with a line back to its starting point.
    fn close_path(&mut self) -> Result<(), Self::ErrorType>;

    /// Appends a rectangle, as a complete subpath, with bottom-left corner
    /// `(x, y)` and the given width and height.
    fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32)
    -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Path Painting operators.
pub trait PathPaintingOps: PdfOperatorBackendError {
    /// Strokes the current path.
    fn stroke_path(&mut self) -> Result<(), Self::ErrorType>;

    /// Closes the current subpath and then strokes it.
    fn close_and_stroke_path(&mut self) -> Result<(), Self::ErrorType>;

    /// Fills the current path using the non-zero winding number rule.
    fn fill_path_nonzero_winding(&mut self) -> Result<(), Self::ErrorType>;

    /// Fills the current path using the even-odd rule.
    fn fill_path_even_odd(&mut self) -> Result<(), Self::ErrorType>;

    /// Fills, then strokes, the current path using the non-zero winding rule.
    fn fill_and_stroke_path_nonzero_winding(&mut self) -> Result<(), Self::ErrorType>;

    /// Fills, then strokes, the current path using the even-odd rule.
    fn fill_and_stroke_path_even_odd(&mut self) -> Result<(), Self::ErrorType>;

    /// Closes, fills, then strokes, using the non-zero winding rule.
    fn close_fill_and_stroke_path_nonzero_winding(&mut self) -> Result<(), Self::ErrorType>;

    /// Closes, fills, then strokes, using the even-odd rule.
    fn close_fill_and_stroke_path_even_odd(&mut self) -> Result<(), Self::ErrorType>;

    /// Ends the current path without filling or stroking it.
    fn end_path_no_op(&mut self) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Clipping Path operators.
pub trait ClippingPathOps: PdfOperatorBackendError {
    /// Intersects the clipping path with the current path, non-zero winding rule.
    fn clip_path_nonzero_winding(&mut self) -> Result<(), Self::ErrorType>;

    /// Intersects the clipping path with the current path, even-odd rule.
    fn clip_path_even_odd(&mut self) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Graphics State operators.
pub trait GraphicsStateOps: PdfOperatorBackendError {
    /// Saves the current graphics state onto the graphics state stack.
    fn save_graphics_state(&mut self) -> Result<(), Self::ErrorType>;

    /// Restores the graphics state by popping the stack (no-op if empty).
    fn restore_graphics_state(&mut self) -> Result<(), Self::ErrorType>;

    /// Concatenates `[a b c d e f]` onto the current transformation matrix.
    fn concat_matrix(
        &mut self,
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
    ) -> Result<(), Self::ErrorType>;

    /// Sets the line width for path stroking, in user space units.
    fn set_line_width(&mut self, width: f32) -> Result<(), Self::ErrorType>;

    /// Sets the line cap style for path stroking.
    fn set_line_cap(&mut self, cap_style: LineCap) -> Result<(), Self::ErrorType>;

    /// Sets the line join style for path stroking.
    fn set_line_join(&mut self, join_style: LineJoin) -> Result<(), Self::ErrorType>;

    /// Sets the miter limit for path stroking.
    fn set_miter_limit(&mut self, limit: f32) -> Result<(), Self::ErrorType>;

    /// Sets the dash pattern (alternating dash/gap lengths) and phase.
    fn set_dash_pattern(
        &mut self,
        dash_array: &[f32],
        dash_phase: f32,
    ) -> Result<(), Self::ErrorType>;

    /// Sets the rendering intent for color reproduction. (`ri`)
    fn set_rendering_intent(&mut self, intent: &str) -> Result<(), Self::ErrorType>;

    /// Sets the flatness tolerance for curve rendering. (`i`)
    fn set_flatness_tolerance(&mut self, tolerance: f32) -> Result<(), Self::ErrorType>;

    /// Applies the subset of parameters in a named ExtGState dictionary.
    fn set_graphics_state_from_dict(&mut self, dict_name: &str) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Color operators.
pub trait ColorOps: PdfOperatorBackendError {
    /// Sets the stroking color space by name.
    fn set_stroking_color_space(&mut self, name: &str) -> Result<(), Self::ErrorType>;

    /// Sets the non-stroking (fill) color space by name.
    fn set_non_stroking_color_space(&mut self, name: &str) -> Result<(), Self::ErrorType>;

    /// Sets the stroking color, using the current stroking color space.
    fn set_stroking_color(&mut self, components: &[f32]) -> Result<(), Self::ErrorType>;

    /// Sets the stroking color, with an optional pattern resource name.
    fn set_stroking_color_extended(
        &mut self,
        components: &[f32],
        pattern_name: Option<&str>,
    ) -> Result<(), Self::ErrorType>;

    /// Sets the non-stroking color, using the current non-stroking color space.
    fn set_non_stroking_color(&mut self, components: &[f32]) -> Result<(), Self::ErrorType>;

    /// Sets the non-stroking color, with an optional pattern resource name.
    fn set_non_stroking_color_extended(
        &mut self,
        components: &[f32],
        pattern_name: Option<&str>,
    ) -> Result<(), Self::ErrorType>;

    /// Sets the stroking color space to DeviceGray and applies `gray`.
    fn set_stroking_gray(&mut self, gray: f32) -> Result<(), Self::ErrorType>;

    /// Sets the non-stroking color space to DeviceGray and applies `gray`.
    fn set_non_stroking_gray(&mut self, gray: f32) -> Result<(), Self::ErrorType>;

    /// Sets the stroking color space to DeviceRGB and applies `(r, g, b)`.
    fn set_stroking_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), Self::ErrorType>;

    /// Sets the non-stroking color space to DeviceRGB and applies `(r, g, b)`.
    fn set_non_stroking_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), Self::ErrorType>;

    /// Sets the stroking color space to DeviceCMYK and applies `(c, m, y, k)`.
    fn set_stroking_cmyk(&mut self, c: f32, m: f32, y: f32, k: f32) -> Result<(), Self::ErrorType>;

    /// Sets the non-stroking color space to DeviceCMYK and applies `(c, m, y, k)`.
    fn set_non_stroking_cmyk(
        &mut self,
        c: f32,
        m: f32,
        y: f32,
        k: f32,
    ) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Text Object operators.
pub trait TextObjectOps: PdfOperatorBackendError {
    /// Begins a text object, resetting the text matrices.
    fn begin_text_object(&mut self) -> Result<(), Self::ErrorType>;

    /// Ends a text object.
    fn end_text_object(&mut self) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Text State operators.
pub trait TextStateOps: PdfOperatorBackendError {
    /// Sets the character spacing, in unscaled text space units.
    fn set_character_spacing(&mut self, spacing: f32) -> Result<(), Self::ErrorType>;

    /// Sets the word spacing, in unscaled text space units.
    fn set_word_spacing(&mut self, spacing: f32) -> Result<(), Self::ErrorType>;

    /// Sets the horizontal scaling, as a percentage (100.0 = no scaling).
    fn set_horizontal_text_scaling(&mut self, scale_percent: f32) -> Result<(), Self::ErrorType>;

    /// Sets the text leading, in unscaled text space units.
    fn set_text_leading(&mut self, leading: f32) -> Result<(), Self::ErrorType>;

    /// Resolves `font_name` via the font collaborator and sets the font and size.
    fn set_font_and_size(&mut self, font_name: &str, size: f32) -> Result<(), Self::ErrorType>;

    /// Sets the text rendering mode.
    fn set_text_rendering_mode(&mut self, mode: TextRenderingMode) -> Result<(), Self::ErrorType>;

    /// Sets the text rise, in unscaled text space units.
    fn set_text_rise(&mut self, rise: f32) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Text Positioning operators.
pub trait TextPositioningOps: PdfOperatorBackendError {
    /// Moves to the start of the next line, offset by `(tx, ty)`.
    fn move_text_position(&mut self, tx: f32, ty: f32) -> Result<(), Self::ErrorType>;

    /// Moves to the start of the next line, offset by `(tx, ty)`, and sets
    /// the leading to `-ty`.
    fn move_text_position_and_set_leading(
        &mut self,
        tx: f32,
        ty: f32,
    ) -> Result<(), Self::ErrorType>;

    /// Sets the text matrix and text line matrix to `[a b c d e f]`.
    fn set_text_matrix(
        &mut self,
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
    ) -> Result<(), Self::ErrorType>;

    /// Moves to the start of the next line, using the current leading.
    fn move_to_start_of_next_line(&mut self) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Text Showing operators.
pub trait TextShowingOps: PdfOperatorBackendError {
    /// Shows a text string at the current text position.
    fn show_text(&mut self, text: &[u8]) -> Result<(), Self::ErrorType>;

    /// Shows text, alternating strings with numeric glyph-position adjustments.
    fn show_text_with_glyph_positioning(
        &mut self,
        elements: &[TextElement],
    ) -> Result<(), Self::ErrorType>;

    /// Moves to the next line, using the current leading, and shows a text string.
    fn move_to_next_line_and_show_text(&mut self, text: &[u8]) -> Result<(), Self::ErrorType>;

    /// Sets word and character spacing, moves to the next line, and shows a text string.
    fn set_spacing_and_show_text(
        &mut self,
        word_spacing: f32,
        char_spacing: f32,
        text: &[u8],
    ) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF XObject operators.
pub trait XObjectOps: PdfOperatorBackendError {
    /// Invokes a named XObject (an image or a Form XObject).
    fn invoke_xobject(&mut self, xobject_name: &str) -> Result<(), Self::ErrorType>;

    /// Draws an inline image, as scanned by the driver loop from a
    /// `BI … ID … EI` sequence: the abbreviated-key dictionary expanded to
    /// its full key names, plus the raw (still-encoded) sample data between
    /// `ID` and `EI`.
    fn draw_inline_image(&mut self, dict: &Rc<Dictionary>, data: &[u8]) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Shading operators.
pub trait ShadingOps: PdfOperatorBackendError {
    /// Paints the area defined by a named shading resource. (`sh`)
    fn paint_shading(&mut self, shading_name: &str) -> Result<(), Self::ErrorType>;
}

/// Defines methods to handle PDF Marked Content operators.
pub trait MarkedContentOps: PdfOperatorBackendError {
    /// Defines a marked-content point. (`MP`)
    fn mark_point(&mut self, tag: &str) -> Result<(), Self::ErrorType>;

    /// Defines a marked-content point with an associated property list. (`DP`)
    fn mark_point_with_properties(
        &mut self,
        tag: &str,
        properties_name: &str,
    ) -> Result<(), Self::ErrorType>;

    /// Begins a marked-content sequence. (`BMC`)
    fn begin_marked_content(&mut self, tag: &str) -> Result<(), Self::ErrorType>;

    /// Begins a marked-content sequence with an associated property list. (`BDC`)
    fn begin_marked_content_with_properties(
        &mut self,
        tag: &str,
        properties: &Rc<Dictionary>,
    ) -> Result<(), Self::ErrorType>;

    /// Ends a marked-content sequence. (`EMC`)
    fn end_marked_content(&mut self) -> Result<(), Self::ErrorType>;
}

/// A comprehensive backend that implements every operator category. Any
/// command sink the interpreter drives implements this trait; the dispatcher
/// never depends on the individual category traits directly.
pub trait PdfOperatorBackend:
    PdfOperatorBackendError
    + PathConstructionOps
    + PathPaintingOps
    + ClippingPathOps
    + GraphicsStateOps
    + ColorOps
    + TextObjectOps
    + TextStateOps
    + TextPositioningOps
    + TextShowingOps
    + XObjectOps
    + ShadingOps
    + MarkedContentOps
{
    /// Called once after the stream is exhausted (or the sink is about to be
    /// dropped), so the backend can flush any buffered state, e.g. a pending
    /// text run. The default implementation does nothing.
    fn finish(&mut self) -> Result<(), Self::ErrorType> {
        Ok(())
    }
}
