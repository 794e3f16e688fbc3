//! On-screen sliders for the tunable flocking weights.

use ggez::graphics::{self, DrawMode, DrawParam, MeshBuilder, Rect, Text, TextAlign, TextLayout};
use ggez::input::mouse::MouseButton;
use ggez::{Context, GameResult};
use glam::Vec2;
use tracing::debug;

use crate::params::{FlockParams, Tunable};
use crate::theme::{Theme, WidgetColors};
use crate::util::*;

const CAPTION_GAP: f32 = 4.0;

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelInput {
    pub cursor: Vec2,
    pub pressed: bool,
    pub just_pressed: bool,
}

impl PanelInput {
    pub fn from_context(ctx: &Context) -> Self {
        let cursor = ctx.mouse.position();
        PanelInput {
            cursor: Vec2::new(cursor.x, cursor.y),
            pressed: ctx.mouse.button_pressed(MouseButton::Left),
            just_pressed: ctx.mouse.button_just_pressed(MouseButton::Left),
        }
    }
}

/// A horizontal slider bar bound to one [`Tunable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub tunable: Tunable,
    pub label: &'static str,
    pub bounds: Rect,
    pub min_caption: &'static str,
    pub max_caption: &'static str,
}

impl Slider {
    pub fn new(tunable: Tunable, label: &'static str, bounds: Rect) -> Self {
        Slider {
            tunable,
            label,
            bounds,
            min_caption: "0",
            max_caption: "full",
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }

    /// Value selected by a cursor at horizontal position `x`, clamped to the range.
    pub fn value_at(&self, x: f32) -> f32 {
        let range = self.tunable.range();
        let (min, max) = (*range.start(), *range.end());
        let value = min + (x - self.bounds.x) / self.bounds.w * (max - min);
        value.clamp(min, max)
    }

    /// Width of the filled part of the bar for `value`.
    pub fn fill_width(&self, value: f32) -> f32 {
        let range = self.tunable.range();
        let (min, max) = (*range.start(), *range.end());
        let inner = self.bounds.w - 2.0;
        ((value - min) / (max - min)).clamp(0.0, 1.0) * inner
    }
}

pub struct ParameterPanel {
    sliders: [Slider; 3],
    active: Option<usize>,
}

impl ParameterPanel {
    pub fn new() -> Self {
        ParameterPanel {
            sliders: [
                Slider::new(
                    Tunable::Avoidance,
                    "Separation",
                    Rect::new(100.0, 380.0, 105.0, 20.0),
                ),
                Slider::new(
                    Tunable::Alignment,
                    "Alignment",
                    Rect::new(350.0, 380.0, 105.0, 20.0),
                ),
                Slider::new(
                    Tunable::Centring,
                    "Cohesion",
                    Rect::new(595.0, 380.0, 105.0, 20.0),
                ),
            ],
            active: None,
        }
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// Slider currently captured by a drag.
    pub fn active(&self) -> Option<&Slider> {
        self.active.map(|idx| &self.sliders[idx])
    }

    /// Applies this frame's pointer input to `params`.
    ///
    /// A drag is captured by the slider under the cursor when the button goes
    /// down and follows the cursor until release, even outside the bar.
    /// Returns the weight that changed, if any.
    pub fn interact(&mut self, input: &PanelInput, params: &mut FlockParams) -> Option<Tunable> {
        if !input.pressed {
            self.active = None;
            return None;
        }
        if input.just_pressed {
            self.active = self.sliders.iter().position(|s| s.contains(input.cursor));
        }

        let slider = &self.sliders[self.active?];
        let value = slider.value_at(input.cursor.x);
        let field = params.get_mut(slider.tunable);
        if *field == value {
            return None;
        }
        *field = value;
        debug!(tunable = ?slider.tunable, value, "flock parameter changed");
        Some(slider.tunable)
    }

    fn colors<'t>(&self, idx: usize, cursor: Vec2, theme: &'t Theme) -> &'t WidgetColors {
        if self.active == Some(idx) {
            &theme.pressed
        } else if self.sliders[idx].contains(cursor) {
            &theme.focused
        } else {
            &theme.normal
        }
    }

    pub fn draw(
        &self,
        ctx: &mut Context,
        canvas: &mut graphics::Canvas,
        params: &FlockParams,
        theme: &Theme,
        cursor: Vec2,
    ) -> GameResult {
        tracy_scope!("draw_ui");
        let mut builder = MeshBuilder::new();
        for (idx, slider) in self.sliders.iter().enumerate() {
            let colors = self.colors(idx, cursor, theme);
            let Rect { x, y, h, .. } = slider.bounds;
            builder.rectangle(DrawMode::fill(), slider.bounds, theme.normal.base)?;
            builder.rectangle(DrawMode::stroke(1.0), slider.bounds, colors.border)?;

            let fill = slider.fill_width(params.get(slider.tunable));
            if fill > 0.0 {
                builder.rectangle(
                    DrawMode::fill(),
                    Rect::new(x + 1.0, y + 1.0, fill, h - 2.0),
                    colors.text,
                )?;
            }
        }
        let mesh = graphics::Mesh::from_data(ctx, builder.build());
        canvas.draw(&mesh, DrawParam::new());

        for (idx, slider) in self.sliders.iter().enumerate() {
            let colors = self.colors(idx, cursor, theme);
            let Rect { x, y, w, h } = slider.bounds;
            let mid_y = y + h / 2.0;

            draw_text(
                canvas,
                slider.min_caption,
                Vec2::new(x - CAPTION_GAP, mid_y),
                TextAlign::End,
                colors.text,
                theme,
            );
            draw_text(
                canvas,
                slider.max_caption,
                Vec2::new(x + w + CAPTION_GAP, mid_y),
                TextAlign::Begin,
                colors.text,
                theme,
            );
            draw_text(
                canvas,
                slider.label,
                Vec2::new(x + w / 2.0, mid_y),
                TextAlign::Middle,
                theme.label,
                theme,
            );
        }
        Ok(())
    }
}

impl Default for ParameterPanel {
    fn default() -> Self {
        ParameterPanel::new()
    }
}

fn draw_text(
    canvas: &mut graphics::Canvas,
    content: &str,
    anchor: Vec2,
    h_align: TextAlign,
    color: graphics::Color,
    theme: &Theme,
) {
    let mut text = Text::new(content);
    text.set_scale(theme.text_size).set_layout(TextLayout {
        h_align,
        v_align: TextAlign::Middle,
    });
    canvas.draw(&text, DrawParam::new().dest(anchor).color(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32, y: f32) -> PanelInput {
        PanelInput {
            cursor: Vec2::new(x, y),
            pressed: true,
            just_pressed: true,
        }
    }

    fn hold(x: f32, y: f32) -> PanelInput {
        PanelInput {
            cursor: Vec2::new(x, y),
            pressed: true,
            just_pressed: false,
        }
    }

    #[test]
    fn sliders_sit_at_their_fixed_rectangles() {
        let panel = ParameterPanel::new();
        let layout: Vec<_> = panel
            .sliders()
            .iter()
            .map(|s| (s.tunable, s.label, s.bounds.x))
            .collect();
        assert_eq!(
            layout,
            vec![
                (Tunable::Avoidance, "Separation", 100.0),
                (Tunable::Alignment, "Alignment", 350.0),
                (Tunable::Centring, "Cohesion", 595.0),
            ]
        );
        for slider in panel.sliders() {
            assert_eq!((slider.bounds.y, slider.bounds.w, slider.bounds.h), (380.0, 105.0, 20.0));
            assert_eq!((slider.min_caption, slider.max_caption), ("0", "full"));
        }
    }

    #[test]
    fn value_maps_linearly_and_clamps() {
        let panel = ParameterPanel::new();
        let separation = &panel.sliders()[0];
        assert_eq!(separation.value_at(100.0), 0.0);
        assert_eq!(separation.value_at(205.0), 2.0);
        assert!((separation.value_at(152.5) - 1.0).abs() < 1e-5);
        assert_eq!(separation.value_at(20.0), 0.0);
        assert_eq!(separation.value_at(400.0), 2.0);

        let cohesion = &panel.sliders()[2];
        assert!((cohesion.value_at(616.0) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn fill_width_tracks_value() {
        let panel = ParameterPanel::new();
        let alignment = &panel.sliders()[1];
        assert_eq!(alignment.fill_width(0.0), 0.0);
        assert_eq!(alignment.fill_width(1.0), 103.0);
        assert!((alignment.fill_width(0.5) - 51.5).abs() < 1e-4);
    }

    #[test]
    fn press_inside_slider_sets_its_weight() {
        let mut panel = ParameterPanel::new();
        let mut params = FlockParams::default();

        let changed = panel.interact(&press(402.5, 390.0), &mut params);
        assert_eq!(changed, Some(Tunable::Alignment));
        assert!((params.alignment_factor - 0.5).abs() < 1e-5);
        assert_eq!(params.avoidance_factor, 1.0);
        assert_eq!(params.centring_factor, 0.1);
    }

    #[test]
    fn drag_stays_captured_outside_the_bar() {
        let mut panel = ParameterPanel::new();
        let mut params = FlockParams::default();

        panel.interact(&press(110.0, 390.0), &mut params);
        let changed = panel.interact(&hold(300.0, 100.0), &mut params);
        assert_eq!(changed, Some(Tunable::Avoidance));
        assert_eq!(params.avoidance_factor, 2.0);
        assert_eq!(panel.active().map(|s| s.tunable), Some(Tunable::Avoidance));

        let released = PanelInput {
            cursor: Vec2::new(300.0, 100.0),
            ..PanelInput::default()
        };
        assert_eq!(panel.interact(&released, &mut params), None);
        assert!(panel.active().is_none());
    }

    #[test]
    fn press_outside_sliders_changes_nothing() {
        let mut panel = ParameterPanel::new();
        let mut params = FlockParams::default();

        assert_eq!(panel.interact(&press(400.0, 200.0), &mut params), None);
        // Dragging onto a slider does not capture it.
        assert_eq!(panel.interact(&hold(400.0, 390.0), &mut params), None);
        assert_eq!(params, FlockParams::default());
    }
}
