//! Shot brief construction.
//!
//! A "shot brief" is the natural-language instruction combining subject,
//! camera angle, and style that accompanies the uploaded photo. The
//! promo brief is the second instruction that asks for promotional text
//! to be laid over an already-generated studio shot.

use std::fmt;

/// Compositional preset for the studio re-shoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraAngle {
    /// Straight-on, as if seated at the table.
    EyeLevel,
    /// The classic food photography angle, showing top and side.
    #[default]
    FortyFiveDegree,
    /// Flat lay, looking directly down onto the dish.
    TopDown,
}

impl CameraAngle {
    /// All angles in display order, for rendering the preset buttons.
    pub const ALL: [Self; 3] = [Self::EyeLevel, Self::FortyFiveDegree, Self::TopDown];

    /// Display label for the preset button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EyeLevel => "Eye-Level",
            Self::FortyFiveDegree => "45-Degree",
            Self::TopDown => "Top-Down",
        }
    }

    /// The composition instruction embedded in the shot brief.
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::TopDown => {
                "Re-compose the shot from a top-down (flat lay) perspective, \
                 looking directly down onto the dish."
            }
            Self::FortyFiveDegree => {
                "Re-compose the shot from a 45-degree angle, showing both the \
                 top and side of the dish to create a sense of depth. This is \
                 a classic food photography angle."
            }
            Self::EyeLevel => {
                "Re-compose the shot from an eye-level or straight-on \
                 perspective, as if you are sitting at the table looking at \
                 the dish."
            }
        }
    }
}

impl fmt::Display for CameraAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Style used when the user leaves the style prompt empty, to ensure a
/// high-quality result.
const DEFAULT_STYLE: &str = "Professional studio food photography, clean and appetizing.";

/// Build the studio re-shoot instruction for one uploaded photo.
///
/// An empty or whitespace-only `style` falls back to [`DEFAULT_STYLE`].
#[must_use]
pub fn shot_brief(angle: CameraAngle, style: &str) -> String {
    let style = style.trim();
    let style = if style.is_empty() { DEFAULT_STYLE } else { style };

    format!(
        "ROLE: AI Art Director for professional food photography.\n\
         \n\
         TASK: Recreate the user's uploaded photo. Your job is to synthesize \
         all elements of the following 'Shot Brief' into a single, cohesive, \
         hyper-realistic final image.\n\
         \n\
         --- SHOT BRIEF ---\n\
         1. SUBJECT: The food item in the original photo. Crucial: Do NOT \
         change the food itself. The dish must remain the same.\n\
         2. CAMERA ANGLE: {}\n\
         3. STYLE & MOOD: {style}\n\
         --------------------\n\
         \n\
         EXECUTION GUIDELINES:\n\
         - SYNTHESIZE: The lighting, composition, background, and props must \
         all work together to perfectly match the requested CAMERA ANGLE and \
         STYLE & MOOD.\n\
         - PHOTOREALISM: The output MUST look like a real photo from a \
         high-end DSLR camera. Avoid any \"AI\" or \"digital\" look. Focus \
         on realistic textures, reflections, and shadows.\n\
         - LIGHTING: Use professional lighting techniques (e.g., softbox, \
         directional light, subtle rim light) appropriate for the brief to \
         create depth and an appetizing look.\n\
         - COMPOSITION: Re-compose the shot based on the brief. Use shallow \
         depth of field (bokeh) to make the subject pop. Ensure the focus is \
         sharp on the most delicious part of the dish.\n\
         - CLEAN OUTPUT: Do NOT add text, watermarks, or logos. Output ONLY \
         the final, edited image.",
        angle.instruction()
    )
}

/// Build the promotional-text overlay instruction for a studio shot.
#[must_use]
pub fn promo_brief(headline: &str, details: &str, style: &str) -> String {
    format!(
        "ROLE: AI Graphic Designer.\n\
         \n\
         TASK: Add promotional text to the provided image. Crucially: DO NOT \
         alter the underlying image of the food in any way. You are only \
         adding text elements on top of it.\n\
         \n\
         --- TEXT CONTENT ---\n\
         - Headline: \"{headline}\"\n\
         - Details: \"{details}\"\n\
         --------------------\n\
         \n\
         --- DESIGN BRIEF ---\n\
         - Style: \"{style}\"\n\
         --------------------\n\
         \n\
         EXECUTION GUIDELINES:\n\
         - Intelligent Placement: Analyze the image composition and place the \
         text in a visually appealing area, such as negative space. Avoid \
         covering the main subject (the food).\n\
         - Legibility: Ensure the text is highly readable. Use colors, fonts, \
         and effects (like drop shadows or outlines) that contrast well with \
         the background.\n\
         - Adherence to Style: Strictly follow the design brief for the \
         text's style.\n\
         - Clean Output: Do not add any extra elements, watermarks, or logos. \
         Output ONLY the final image with the text applied."
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_variant() {
        // If you add a variant to CameraAngle, update ALL and this count.
        assert_eq!(CameraAngle::ALL.len(), 3);
        let mut seen = std::collections::HashSet::new();
        for angle in CameraAngle::ALL {
            assert!(seen.insert(angle), "duplicate angle in ALL: {angle}");
        }
    }

    #[test]
    fn default_angle_is_forty_five() {
        assert_eq!(CameraAngle::default(), CameraAngle::FortyFiveDegree);
    }

    #[test]
    fn each_angle_has_distinct_instruction() {
        let mut seen = std::collections::HashSet::new();
        for angle in CameraAngle::ALL {
            assert!(seen.insert(angle.instruction()));
        }
    }

    #[test]
    fn shot_brief_embeds_angle_and_style() {
        let brief = shot_brief(CameraAngle::TopDown, "Dark and moody atmosphere");
        assert!(brief.contains("top-down (flat lay)"));
        assert!(brief.contains("STYLE & MOOD: Dark and moody atmosphere"));
    }

    #[test]
    fn empty_style_falls_back_to_default() {
        let brief = shot_brief(CameraAngle::EyeLevel, "");
        assert!(brief.contains(DEFAULT_STYLE));

        let brief = shot_brief(CameraAngle::EyeLevel, "   \n");
        assert!(brief.contains(DEFAULT_STYLE));
    }

    #[test]
    fn non_empty_style_suppresses_default() {
        let brief = shot_brief(CameraAngle::EyeLevel, "Rustic wooden table");
        assert!(!brief.contains(DEFAULT_STYLE));
    }

    #[test]
    fn promo_brief_embeds_all_fields() {
        let brief = promo_brief("Bakso Special", "Isi 20 Pcs", "Bold yellow text");
        assert!(brief.contains("Headline: \"Bakso Special\""));
        assert!(brief.contains("Details: \"Isi 20 Pcs\""));
        assert!(brief.contains("Style: \"Bold yellow text\""));
    }

    #[test]
    fn promo_brief_forbids_altering_the_photo() {
        let brief = promo_brief("Sale", "", "");
        assert!(brief.contains("DO NOT alter the underlying image"));
    }
}
