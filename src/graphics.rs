use bugworld::simulation::entity::Entity;
use bugworld::simulation::world::World;
use macroquad::prelude::*;
use ndarray::Array1;

/// Half-width of the square region of the plane that is drawn.
const VIEW_EXTENT: f32 = 800.0;
/// Bug radius per unit of mass, in world units.
const BUG_RADIUS_PER_MASS: f32 = 8.0;
/// Food radius in world units.
const FOOD_RADIUS: f32 = 4.0;
/// Nothing is drawn smaller than this many pixels.
const MIN_SCREEN_RADIUS: f32 = 1.5;

/// Screen area available for the world, left of the stats panel.
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn current(panel_width: f32) -> Self {
        Self {
            width: (screen_width() - panel_width).max(1.0),
            height: screen_height(),
        }
    }

    fn scale(&self) -> f32 {
        self.width.min(self.height) / (2.0 * VIEW_EXTENT)
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for Array1<f32> {
    type Output = Vec2;
    fn to_screen(&self, viewport: &Viewport) -> Vec2 {
        let scale = viewport.scale();
        vec2(
            viewport.width / 2.0 + self[0] * scale,
            viewport.height / 2.0 + self[1] * scale,
        )
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, viewport: &Viewport) -> f32 {
        (self * viewport.scale()).max(MIN_SCREEN_RADIUS)
    }
}

pub fn draw_world(world: &World, viewport: &Viewport) {
    draw_rectangle_lines(
        viewport.width / 2.0 - VIEW_EXTENT * viewport.scale(),
        viewport.height / 2.0 - VIEW_EXTENT * viewport.scale(),
        2.0 * VIEW_EXTENT * viewport.scale(),
        2.0 * VIEW_EXTENT * viewport.scale(),
        1.0,
        LIGHTGRAY,
    );

    // food first so bugs sitting on it stay visible
    for entity in world.entities().values() {
        if let Entity::Food(food) = entity {
            let screen_pos = food.pos.to_screen(viewport);
            draw_circle(
                screen_pos.x,
                screen_pos.y,
                FOOD_RADIUS.to_screen(viewport),
                Color::from_rgba(60, 170, 70, 255),
            );
        }
    }

    for entity in world.entities().values() {
        if let Entity::Bug(bug) = entity {
            let screen_pos = bug.pos.to_screen(viewport);
            let radius = (bug.mass.max(0.0) * BUG_RADIUS_PER_MASS).to_screen(viewport);

            // well fed bugs are drawn saturated, hungry ones fade out
            let fed = (bug.nutrition / bug.mass.max(f32::EPSILON)).clamp(0.2, 1.0);
            draw_circle(
                screen_pos.x,
                screen_pos.y,
                radius,
                Color::new(0.85, 0.25, 0.2, fed),
            );
        }
    }
}
