//! Goose pen ecosystem
//!
//! Multi-entity simulation on a normalized [0,1] x [0,1] surface. Geese
//! wander or seek ground food, grow from egg to adult over ten seconds,
//! mutate color when fed, and breed into color-mixed offspring when one
//! mature goose is dragged onto another.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::{FoodKind, Hcl};

/// Sim-clock milliseconds per pen tick (movement and food scan share it).
pub const TICK_MS: u64 = 500;
/// Distance at which detected food is actually eaten.
pub const PICKUP_RADIUS: f32 = 0.05;
/// Distance at which geese can detect ground food.
pub const SCAN_RADIUS: f32 = 0.2;
/// Speed multiplier when walking toward food.
pub const FOOD_SPEED_MULTIPLIER: f32 = 2.0;
/// Time for a goose to grow from egg to full size.
pub const GROWTH_DURATION_MS: u64 = 10_000;
/// Per-goose wander speed range; drawn once at spawn.
pub const MIN_VELOCITY: f32 = 0.01;
pub const MAX_VELOCITY: f32 = 0.05;
/// Visual scale while growing.
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 1.0;

/// One goose.
#[derive(Debug, Clone)]
pub struct Goose {
    pub color: Hcl,
    /// Normalized surface position, [0,1] per axis.
    pub pos: Vec2,
    /// Sim-clock ms at birth; `None` means already fully grown.
    pub birth_ms: Option<u64>,
    /// Wander speed, drawn once from [MIN_VELOCITY, MAX_VELOCITY).
    pub velocity: f32,
    /// Faces left after moving left.
    pub facing_left: bool,
}

impl Goose {
    /// Age in sim-clock ms; `None` for geese with no recorded birth.
    pub fn age_ms(&self, now_ms: u64) -> Option<u64> {
        self.birth_ms.map(|b| now_ms.saturating_sub(b))
    }

    /// Mature geese may breed. No recorded birth counts as mature.
    pub fn is_mature(&self, now_ms: u64) -> bool {
        match self.age_ms(now_ms) {
            None => true,
            Some(age) => age >= GROWTH_DURATION_MS,
        }
    }

    /// Visual scale: linear MIN_SCALE -> MAX_SCALE over the growth duration.
    pub fn scale(&self, now_ms: u64) -> f32 {
        match self.age_ms(now_ms) {
            Some(age) if age < GROWTH_DURATION_MS => {
                let progress = age as f32 / GROWTH_DURATION_MS as f32;
                MIN_SCALE + progress * (MAX_SCALE - MIN_SCALE)
            }
            _ => MAX_SCALE,
        }
    }
}

/// A food item sitting on the surface, waiting to be eaten.
#[derive(Debug, Clone)]
pub struct FoodOnGround {
    pub id: u32,
    pub kind: FoodKind,
    pub pos: Vec2,
}

/// Typed drag-and-drop payload, as carried in the host's drag data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropPayload {
    /// A starting "egg" color from the tray.
    Egg(Hcl),
    /// A food icon from the tray.
    Food(FoodKind),
    /// A goose picked up from the surface, by index.
    Goose(usize),
}

impl DropPayload {
    /// Parse drag data: key `"color"` carries a JSON `[h, c, l]` array, key
    /// `"food"` a food kind name, key `"goose"` a decimal index. Anything
    /// else is `None` and the drop becomes a no-op.
    pub fn parse(key: &str, data: &str) -> Option<Self> {
        match key {
            "color" => {
                let [h, c, l]: [f32; 3] = serde_json::from_str(data).ok()?;
                Some(DropPayload::Egg(Hcl::new(h, c, l)))
            }
            "food" => FoodKind::from_name(data).map(DropPayload::Food),
            "goose" => data.trim().parse().ok().map(DropPayload::Goose),
            _ => None,
        }
    }
}

/// The goose pen: every goose, the food on the ground, and the sim clock.
///
/// One 500 ms tick advances all geese in insertion order; that order is the
/// tie-breaker when two geese race for the same food.
#[derive(Debug, Clone)]
pub struct Pen {
    geese: Vec<Goose>,
    food: Vec<FoodOnGround>,
    next_food_id: u32,
    now_ms: u64,
    rng: Pcg32,
}

impl Pen {
    pub fn new(seed: u64) -> Self {
        Self {
            geese: Vec::new(),
            food: Vec::new(),
            next_food_id: 0,
            now_ms: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn geese(&self) -> &[Goose] {
        &self.geese
    }

    pub fn food(&self) -> &[FoodOnGround] {
        &self.food
    }

    /// Current sim-clock time in ms.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn draw_velocity(&mut self) -> f32 {
        self.rng.random_range(MIN_VELOCITY..MAX_VELOCITY)
    }

    /// Drop an egg color at `pos`: a goose hatches there and starts growing.
    /// Returns the new goose's index.
    pub fn spawn_egg(&mut self, color: Hcl, pos: Vec2) -> usize {
        let velocity = self.draw_velocity();
        self.geese.push(Goose {
            color,
            pos: clamp_unit(pos),
            birth_ms: Some(self.now_ms),
            velocity,
            facing_left: false,
        });
        let index = self.geese.len() - 1;
        log::info!("goose {} hatched at {:?}", index, self.geese[index].pos);
        index
    }

    /// Add a goose with no recorded birth (already fully grown).
    pub fn add_adult(&mut self, color: Hcl, pos: Vec2) -> usize {
        let velocity = self.draw_velocity();
        self.geese.push(Goose {
            color,
            pos: clamp_unit(pos),
            birth_ms: None,
            velocity,
            facing_left: false,
        });
        self.geese.len() - 1
    }

    /// Drop a food icon on the surface at `pos`. Returns the placed id.
    pub fn place_food(&mut self, kind: FoodKind, pos: Vec2) -> u32 {
        let id = self.next_food_id;
        self.next_food_id += 1;
        self.food.push(FoodOnGround {
            id,
            kind,
            pos: clamp_unit(pos),
        });
        id
    }

    /// Food dropped straight onto a goose: the effect applies immediately
    /// and the item never touches the ground. Bad indices are ignored.
    pub fn feed_goose(&mut self, index: usize, kind: FoodKind) {
        if let Some(goose) = self.geese.get_mut(index) {
            goose.color = goose.color.apply_food(kind);
            log::info!("goose {} hand-fed {:?}", index, kind);
        }
    }

    /// Goose dragged onto empty surface: reposition it.
    pub fn move_goose(&mut self, index: usize, pos: Vec2) {
        if let Some(goose) = self.geese.get_mut(index) {
            goose.pos = clamp_unit(pos);
        }
    }

    /// Breed `dragged` onto `target`. Both must exist, be distinct, and be
    /// mature; otherwise this is a silent no-op. The offspring takes the
    /// circular-mean hue with the dragged parent's chroma and lightness, at
    /// the parents' midpoint, with a fresh birth time and velocity. Returns
    /// the new goose's index.
    pub fn breed(&mut self, dragged: usize, target: usize) -> Option<usize> {
        if dragged == target {
            return None;
        }
        let now = self.now_ms;
        let (a, b) = match (self.geese.get(dragged), self.geese.get(target)) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };
        if !a.is_mature(now) || !b.is_mature(now) {
            log::info!("breeding rejected: goose still growing");
            return None;
        }

        let color = a.color.mix(b.color);
        let pos = clamp_unit((a.pos + b.pos) / 2.0);
        let velocity = self.draw_velocity();
        self.geese.push(Goose {
            color,
            pos,
            birth_ms: Some(now),
            velocity,
            facing_left: false,
        });
        let index = self.geese.len() - 1;
        log::info!("geese {} + {} bred goose {}", dragged, target, index);
        Some(index)
    }

    /// Drop handler for payloads released on open surface at `pos`.
    pub fn drop_on_surface(&mut self, payload: DropPayload, pos: Vec2) {
        match payload {
            DropPayload::Egg(color) => {
                self.spawn_egg(color, pos);
            }
            DropPayload::Food(kind) => {
                self.place_food(kind, pos);
            }
            DropPayload::Goose(index) => self.move_goose(index, pos),
        }
    }

    /// Drop handler for payloads released on top of goose `target`. Eggs
    /// fall through to the surface underneath the goose.
    pub fn drop_on_goose(&mut self, payload: DropPayload, target: usize, pos: Vec2) {
        match payload {
            DropPayload::Food(kind) => self.feed_goose(target, kind),
            DropPayload::Goose(dragged) => {
                self.breed(dragged, target);
            }
            DropPayload::Egg(color) => {
                self.spawn_egg(color, pos);
            }
        }
    }

    /// Advance one 500 ms pen tick: every goose, in insertion order, scans
    /// for food and either eats, walks toward the find, or wanders.
    pub fn tick(&mut self) {
        self.now_ms += TICK_MS;
        for index in 0..self.geese.len() {
            self.tick_goose(index);
        }
    }

    fn tick_goose(&mut self, index: usize) {
        let pos = self.geese[index].pos;
        let velocity = self.geese[index].velocity;

        // Nearest ground food within the scan radius.
        let nearest = self
            .food
            .iter()
            .map(|f| (f.id, f.pos, pos.distance(f.pos)))
            .filter(|&(_, _, d)| d <= SCAN_RADIUS)
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

        let delta = match nearest {
            Some((id, _, dist)) if dist < PICKUP_RADIUS => {
                // Close enough to eat: consume instead of moving this tick.
                self.consume(index, id);
                return;
            }
            Some((_, food_pos, dist)) => {
                (food_pos - pos) / dist * (velocity * FOOD_SPEED_MULTIPLIER)
            }
            None => Vec2::new(
                (self.rng.random::<f32>() - 0.5) * velocity,
                (self.rng.random::<f32>() - 0.5) * velocity,
            ),
        };

        let goose = &mut self.geese[index];
        goose.facing_left = delta.x < 0.0;
        goose.pos = clamp_unit(goose.pos + delta);
    }

    fn consume(&mut self, goose_index: usize, food_id: u32) {
        let Some(i) = self.food.iter().position(|f| f.id == food_id) else {
            return;
        };
        let kind = self.food.remove(i).kind;
        let goose = &mut self.geese[goose_index];
        goose.color = goose.color.apply_food(kind);
        log::info!("goose {} ate {:?}", goose_index, kind);
    }
}

fn clamp_unit(p: Vec2) -> Vec2 {
    p.clamp(Vec2::ZERO, Vec2::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_red() -> Hcl {
        Hcl::new(0.0, 0.2, 0.5)
    }

    #[test]
    fn test_spawned_egg_grows() {
        let mut pen = Pen::new(1);
        let g = pen.spawn_egg(quiet_red(), Vec2::new(0.5, 0.5));
        assert_eq!(pen.geese()[g].birth_ms, Some(0));
        assert!(!pen.geese()[g].is_mature(pen.now_ms()));
        assert_eq!(pen.geese()[g].scale(0), MIN_SCALE);

        // Halfway through growth the scale is halfway up.
        let mid = pen.geese()[g].scale(GROWTH_DURATION_MS / 2);
        assert!((mid - (MIN_SCALE + MAX_SCALE) / 2.0).abs() < 0.0001);

        assert_eq!(pen.geese()[g].scale(GROWTH_DURATION_MS), MAX_SCALE);
        assert!(pen.geese()[g].is_mature(GROWTH_DURATION_MS));
    }

    #[test]
    fn test_adult_without_birth_is_mature() {
        let mut pen = Pen::new(1);
        let g = pen.add_adult(quiet_red(), Vec2::new(0.5, 0.5));
        assert!(pen.geese()[g].is_mature(0));
        assert_eq!(pen.geese()[g].scale(0), MAX_SCALE);
    }

    #[test]
    fn test_velocity_drawn_in_range() {
        let mut pen = Pen::new(2);
        for i in 0..50 {
            let g = pen.spawn_egg(quiet_red(), Vec2::new(0.5, 0.5));
            let v = pen.geese()[g].velocity;
            assert!((MIN_VELOCITY..MAX_VELOCITY).contains(&v), "draw {}: {}", i, v);
        }
    }

    #[test]
    fn test_wander_stays_in_bounds() {
        let mut pen = Pen::new(3);
        pen.add_adult(quiet_red(), Vec2::new(0.01, 0.99));
        for _ in 0..500 {
            pen.tick();
            let p = pen.geese()[0].pos;
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_wander_step_bounded_by_velocity() {
        let mut pen = Pen::new(4);
        let g = pen.add_adult(quiet_red(), Vec2::new(0.5, 0.5));
        let v = pen.geese()[g].velocity;
        let before = pen.geese()[g].pos;
        pen.tick();
        let delta = pen.geese()[g].pos - before;
        assert!(delta.x.abs() <= v / 2.0 + 0.0001);
        assert!(delta.y.abs() <= v / 2.0 + 0.0001);
    }

    #[test]
    fn test_goose_walks_toward_scanned_food() {
        let mut pen = Pen::new(5);
        let g = pen.add_adult(quiet_red(), Vec2::new(0.5, 0.5));
        pen.place_food(FoodKind::IncreaseL, Vec2::new(0.65, 0.5));

        let v = pen.geese()[g].velocity;
        let before = pen.geese()[g].pos;
        pen.tick();
        let delta = pen.geese()[g].pos - before;
        // Straight toward the food at double speed.
        assert!((delta.x - v * FOOD_SPEED_MULTIPLIER).abs() < 0.0001);
        assert!(delta.y.abs() < 0.0001);
        assert!(!pen.geese()[g].facing_left);
    }

    #[test]
    fn test_food_outside_scan_radius_is_ignored() {
        let mut pen = Pen::new(6);
        let g = pen.add_adult(quiet_red(), Vec2::new(0.1, 0.1));
        pen.place_food(FoodKind::IncreaseL, Vec2::new(0.9, 0.9));

        let v = pen.geese()[g].velocity;
        let before = pen.geese()[g].pos;
        pen.tick();
        let delta = pen.geese()[g].pos - before;
        // Wander jitter, not the doubled food stride.
        assert!(delta.x.abs() <= v / 2.0 + 0.0001);
        assert_eq!(pen.food().len(), 1);
    }

    #[test]
    fn test_pickup_consumes_instead_of_moving() {
        let mut pen = Pen::new(7);
        let g = pen.add_adult(Hcl::new(0.0, 0.2, 0.5), Vec2::new(0.5, 0.5));
        pen.place_food(FoodKind::IncreaseL, Vec2::new(0.51, 0.5));

        let before = pen.geese()[g].pos;
        pen.tick();
        assert_eq!(pen.food().len(), 0);
        assert_eq!(pen.geese()[g].pos, before);
        assert!((pen.geese()[g].color.lightness - 0.6).abs() < 0.0001);
    }

    #[test]
    fn test_nearest_food_wins() {
        let mut pen = Pen::new(8);
        let g = pen.add_adult(quiet_red(), Vec2::new(0.5, 0.5));
        pen.place_food(FoodKind::IncreaseL, Vec2::new(0.62, 0.5));
        let near = pen.place_food(FoodKind::DecreaseL, Vec2::new(0.58, 0.5));

        pen.tick();
        let delta = pen.geese()[g].pos - Vec2::new(0.5, 0.5);
        assert!(delta.x > 0.0);
        // Walks toward the nearer item; both still on the ground.
        assert_eq!(pen.food().len(), 2);
        assert_eq!(pen.food()[1].id, near);
    }

    #[test]
    fn test_facing_flips_when_walking_left() {
        let mut pen = Pen::new(9);
        let g = pen.add_adult(quiet_red(), Vec2::new(0.5, 0.5));
        pen.place_food(FoodKind::IncreaseL, Vec2::new(0.35, 0.5));
        pen.tick();
        assert!(pen.geese()[g].facing_left);
    }

    #[test]
    fn test_breed_mixes_colors_at_midpoint() {
        let mut pen = Pen::new(10);
        let a = pen.add_adult(Hcl::new(350.0, 0.2, 0.5), Vec2::new(0.2, 0.2));
        let b = pen.add_adult(Hcl::new(20.0, 0.3, 0.7), Vec2::new(0.4, 0.6));

        let child = pen.breed(a, b).expect("both parents mature");
        let goose = &pen.geese()[child];
        assert!((goose.color.hue - 5.0).abs() < 0.0001);
        assert_eq!(goose.color.chroma, pen.geese()[a].color.chroma);
        assert_eq!(goose.color.lightness, pen.geese()[a].color.lightness);
        assert_eq!(goose.pos, Vec2::new(0.3, 0.4));
        assert_eq!(goose.birth_ms, Some(pen.now_ms()));
    }

    #[test]
    fn test_breed_rejects_growing_goose() {
        let mut pen = Pen::new(11);
        let a = pen.add_adult(quiet_red(), Vec2::new(0.2, 0.2));
        let b = pen.spawn_egg(quiet_red(), Vec2::new(0.4, 0.4));

        assert_eq!(pen.breed(a, b), None);
        assert_eq!(pen.breed(b, a), None);
        assert_eq!(pen.geese().len(), 2);

        // Once grown, the same pair breeds.
        for _ in 0..(GROWTH_DURATION_MS / TICK_MS) {
            pen.tick();
        }
        assert!(pen.breed(a, b).is_some());
    }

    #[test]
    fn test_breed_rejects_self_and_bad_indices() {
        let mut pen = Pen::new(12);
        let a = pen.add_adult(quiet_red(), Vec2::new(0.2, 0.2));
        assert_eq!(pen.breed(a, a), None);
        assert_eq!(pen.breed(a, 5), None);
        assert_eq!(pen.geese().len(), 1);
    }

    #[test]
    fn test_food_ids_increment() {
        let mut pen = Pen::new(13);
        let first = pen.place_food(FoodKind::IncreaseL, Vec2::new(0.1, 0.1));
        let second = pen.place_food(FoodKind::DecreaseC, Vec2::new(0.9, 0.9));
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_drop_handlers() {
        let mut pen = Pen::new(14);
        pen.drop_on_surface(DropPayload::Egg(quiet_red()), Vec2::new(0.5, 0.5));
        assert_eq!(pen.geese().len(), 1);

        pen.drop_on_surface(DropPayload::Food(FoodKind::IncreaseC), Vec2::new(0.9, 0.9));
        assert_eq!(pen.food().len(), 1);

        pen.drop_on_surface(DropPayload::Goose(0), Vec2::new(0.7, 0.7));
        assert_eq!(pen.geese()[0].pos, Vec2::new(0.7, 0.7));

        // Food on a goose never touches the ground.
        pen.drop_on_goose(DropPayload::Food(FoodKind::IncreaseL), 0, Vec2::new(0.7, 0.7));
        assert_eq!(pen.food().len(), 1);
        assert!((pen.geese()[0].color.lightness - 0.6).abs() < 0.0001);

        // An egg dropped on a goose falls through to the surface.
        pen.drop_on_goose(DropPayload::Egg(quiet_red()), 0, Vec2::new(0.3, 0.3));
        assert_eq!(pen.geese().len(), 2);
        assert_eq!(pen.geese()[1].pos, Vec2::new(0.3, 0.3));
    }

    #[test]
    fn test_payload_parsing() {
        let egg = DropPayload::parse("color", "[350.0, 0.2, 0.5]").unwrap();
        match egg {
            DropPayload::Egg(c) => {
                assert!((c.hue - 350.0).abs() < 0.0001);
                assert!((c.chroma - 0.2).abs() < 0.0001);
            }
            other => panic!("parsed {:?}", other),
        }

        assert_eq!(
            DropPayload::parse("food", "shift_h_ccw"),
            Some(DropPayload::Food(FoodKind::ShiftHCcw))
        );
        assert_eq!(DropPayload::parse("goose", "3"), Some(DropPayload::Goose(3)));

        assert_eq!(DropPayload::parse("food", "unknown"), None);
        assert_eq!(DropPayload::parse("color", "not json"), None);
        assert_eq!(DropPayload::parse("link", "https://example.com"), None);
    }

    #[test]
    fn test_determinism() {
        let mut a = Pen::new(99);
        let mut b = Pen::new(99);
        for pen in [&mut a, &mut b] {
            pen.add_adult(Hcl::new(120.0, 0.2, 0.6), Vec2::new(0.5, 0.5));
            pen.place_food(FoodKind::ShiftHCw, Vec2::new(0.8, 0.8));
            for _ in 0..200 {
                pen.tick();
            }
        }
        assert_eq!(a.geese()[0].pos, b.geese()[0].pos);
        assert_eq!(a.geese()[0].color, b.geese()[0].color);
        assert_eq!(a.food().len(), b.food().len());
    }
}
