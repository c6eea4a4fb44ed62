//! The particle field as a plain state object.
//!
//! [`ParticleEngine`] receives host events (`on_resize`, `on_pointer_move`,
//! `on_visibility_change`, `on_frame`) and owns everything they touch: the
//! particle collection, pointer offset, visibility flag and frame loop. The
//! drawable surface and the frame scheduler are injected, so the engine
//! runs the same against a browser canvas and against test doubles.

use log::{debug, info};
use rand::rngs::StdRng;

use super::animation::{AnimationLoop, FrameHandle, FrameScheduler, LoopState};
use super::config::{ConfigError, ParticleConfig};
use super::field::ParticleField;
use super::particle::Particle;
use super::pointer::{PointerOffset, PointerTracker, SurfaceOrigin};
use super::render::Surface;
use super::visibility::{VisibilityChange, VisibilityGate};

/// Particle field driven by host events.
///
/// `D` is the drawing surface, `F` the frame scheduler. Once
/// [`teardown`](Self::teardown) has run, every other event is ignored.
pub struct ParticleEngine<D, F> {
	field: ParticleField,
	/// `None` when the host could not provide a 2D context; the simulation
	/// still runs, nothing is drawn.
	surface: Option<D>,
	pointer: PointerTracker,
	gate: VisibilityGate,
	animation: AnimationLoop<F>,
	torn_down: bool,
}

impl<D: Surface, F: FrameScheduler> ParticleEngine<D, F> {
	/// Validates `config`, fills the field and draws it once.
	///
	/// The loop stays idle until the first visible report.
	pub fn init(
		config: &ParticleConfig,
		surface: Option<D>,
		scheduler: F,
		width: f64,
		height: f64,
	) -> Result<Self, ConfigError> {
		let settings = config.validate()?;
		let field = ParticleField::new(settings, width, height);
		Ok(Self::assemble(field, surface, scheduler))
	}

	/// Same as [`init`](Self::init) with a caller-supplied random source.
	pub fn init_with_rng(
		config: &ParticleConfig,
		surface: Option<D>,
		scheduler: F,
		width: f64,
		height: f64,
		rng: StdRng,
	) -> Result<Self, ConfigError> {
		let settings = config.validate()?;
		let field = ParticleField::with_rng(settings, width, height, rng);
		Ok(Self::assemble(field, surface, scheduler))
	}

	fn assemble(field: ParticleField, surface: Option<D>, scheduler: F) -> Self {
		let mut engine = Self {
			field,
			surface,
			pointer: PointerTracker::default(),
			gate: VisibilityGate::default(),
			animation: AnimationLoop::new(scheduler),
			torn_down: false,
		};
		let (width, height) = engine.field.dimensions();
		engine.on_resize(width, height);
		info!(
			"particles: initialized {} particles ({})",
			engine.field.particles().len(),
			if engine.surface.is_some() {
				"drawing"
			} else {
				"no surface"
			}
		);
		engine
	}

	/// Full reset of the collection at the new surface size.
	pub fn on_resize(&mut self, width: f64, height: f64) {
		if self.torn_down {
			return;
		}
		self.field.reset(width, height, self.surface.as_ref());
	}

	/// Raw pointer move in client coordinates; `origin` is the surface's
	/// top-left corner in the same space.
	pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, origin: SurfaceOrigin) {
		let (width, height) = self.field.dimensions();
		self.pointer.on_move(client_x, client_y, origin, width, height);
	}

	/// Records the latest intersection state and starts the loop if the
	/// surface is visible and nothing is scheduled.
	///
	/// A repeated visible report restarts a loop the host had refused to
	/// schedule; it never adds a second chain.
	pub fn on_visibility_change(&mut self, visible: bool) {
		if self.torn_down {
			return;
		}
		let change = self.gate.report(visible);
		if visible && self.animation.start() {
			if change == VisibilityChange::BecameVisible {
				debug!("particles: in view, loop running");
			} else {
				debug!("particles: loop restarted while in view");
			}
		}
	}

	/// Body of a scheduled frame: halts if out of view, otherwise advances the
	/// field one step and requests the next frame.
	pub fn on_frame(&mut self) {
		if self.torn_down || !self.animation.begin_frame(self.gate.in_view()) {
			return;
		}
		self.field.advance(self.pointer.offset(), self.surface.as_ref());
		self.animation.schedule_next();
	}

	/// Cancels any pending frame; later events are ignored.
	pub fn teardown(&mut self) {
		if self.torn_down {
			return;
		}
		self.animation.teardown();
		self.gate.close();
		self.torn_down = true;
		info!("particles: torn down");
	}

	/// Live particles, in slot order.
	pub fn particles(&self) -> &[Particle] {
		self.field.particles()
	}

	/// Current surface width and height.
	pub fn dimensions(&self) -> (f64, f64) {
		self.field.dimensions()
	}

	/// Last committed pointer offset from the surface center.
	pub fn pointer_offset(&self) -> PointerOffset {
		self.pointer.offset()
	}

	/// Last raw pointer position in client coordinates.
	pub fn pointer_position(&self) -> (f64, f64) {
		self.pointer.raw()
	}

	/// Whether a frame chain is active.
	pub fn loop_state(&self) -> LoopState {
		self.animation.state()
	}

	/// Handle of the frame scheduled but not yet run.
	pub fn pending_frame(&self) -> Option<FrameHandle> {
		self.animation.pending()
	}

	/// Latest visibility report.
	pub fn in_view(&self) -> bool {
		self.gate.in_view()
	}

	/// The drawing surface, if the host provided one.
	pub fn surface(&self) -> Option<&D> {
		self.surface.as_ref()
	}

	/// The injected frame scheduler.
	pub fn scheduler(&self) -> &F {
		self.animation.scheduler()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::testing::{ManualScheduler, RecordingSurface};
	use super::*;

	type TestEngine = ParticleEngine<RecordingSurface, ManualScheduler>;

	fn engine(config: ParticleConfig) -> TestEngine {
		ParticleEngine::init_with_rng(
			&config,
			Some(RecordingSurface::default()),
			ManualScheduler::default(),
			400.0,
			300.0,
			StdRng::seed_from_u64(11),
		)
		.unwrap()
	}

	fn requests(engine: &TestEngine) -> usize {
		engine.scheduler().requests
	}

	#[test]
	fn init_fills_and_draws_but_stays_idle() {
		let engine = engine(ParticleConfig::default());
		assert_eq!(engine.particles().len(), 100);
		assert_eq!(engine.surface().unwrap().circle_count(), 100);
		assert_eq!(engine.loop_state(), LoopState::Idle);
		assert_eq!(requests(&engine), 0);
	}

	#[test]
	fn invalid_config_is_rejected() {
		let config = ParticleConfig {
			staticity: 0.0,
			..ParticleConfig::default()
		};
		let result: Result<TestEngine, _> =
			ParticleEngine::init(&config, None, ManualScheduler::default(), 10.0, 10.0);
		assert!(matches!(result, Err(ConfigError::NonPositive { .. })));
	}

	#[test]
	fn hidden_surface_never_schedules() {
		let mut engine = engine(ParticleConfig::default());
		engine.on_visibility_change(false);
		engine.on_frame();
		engine.on_visibility_change(false);
		assert_eq!(requests(&engine), 0);
		assert_eq!(engine.loop_state(), LoopState::Idle);
	}

	#[test]
	fn becoming_visible_starts_exactly_one_chain() {
		let mut engine = engine(ParticleConfig::default());
		engine.on_visibility_change(true);
		engine.on_visibility_change(true);
		assert_eq!(requests(&engine), 1);
		assert_eq!(engine.loop_state(), LoopState::Running);

		engine.on_frame();
		assert_eq!(requests(&engine), 2);
		engine.on_frame();
		assert_eq!(requests(&engine), 3);
	}

	#[test]
	fn hiding_halts_at_next_frame() {
		let mut engine = engine(ParticleConfig::default());
		engine.on_visibility_change(true);
		engine.on_frame();
		engine.on_visibility_change(false);
		assert!(engine.scheduler().cancelled.is_empty());

		engine.on_frame();
		assert_eq!(engine.loop_state(), LoopState::Idle);
		assert_eq!(requests(&engine), 2);
	}

	#[test]
	fn flapping_before_the_pending_frame_does_not_double_schedule() {
		let mut engine = engine(ParticleConfig::default());
		engine.on_visibility_change(true);
		engine.on_visibility_change(false);
		engine.on_visibility_change(true);
		assert_eq!(requests(&engine), 1);

		engine.on_frame();
		assert_eq!(requests(&engine), 2);
		assert_eq!(engine.loop_state(), LoopState::Running);
	}

	#[test]
	fn visible_report_restarts_after_refused_request() {
		let mut engine: TestEngine = ParticleEngine::init_with_rng(
			&ParticleConfig::default(),
			Some(RecordingSurface::default()),
			ManualScheduler::refusing(1),
			400.0,
			300.0,
			StdRng::seed_from_u64(11),
		)
		.unwrap();
		engine.on_visibility_change(true);
		assert!(engine.in_view());
		assert_eq!(engine.loop_state(), LoopState::Idle);
		assert_eq!(requests(&engine), 0);

		engine.on_visibility_change(true);
		assert_eq!(engine.loop_state(), LoopState::Running);
		assert_eq!(requests(&engine), 1);

		engine.on_visibility_change(true);
		assert_eq!(requests(&engine), 1);
	}

	#[test]
	fn oversized_quantity_is_rejected_before_allocating() {
		let config = ParticleConfig {
			quantity: usize::MAX / 2,
			..ParticleConfig::default()
		};
		let result: Result<TestEngine, _> =
			ParticleEngine::init(&config, None, ManualScheduler::default(), 10.0, 10.0);
		assert!(matches!(result, Err(ConfigError::TooMany { .. })));
	}

	#[test]
	fn resize_resets_collection_to_new_bounds() {
		let mut engine = engine(ParticleConfig {
			quantity: 30,
			..ParticleConfig::default()
		});
		engine.on_resize(50.0, 20.0);
		assert_eq!(engine.particles().len(), 30);
		assert_eq!(engine.dimensions(), (50.0, 20.0));
		for p in engine.particles() {
			assert!((0.0..50.0).contains(&p.x));
			assert!((0.0..20.0).contains(&p.y));
			assert_eq!(p.alpha, 0.0);
		}
	}

	#[test]
	fn pointer_offset_uses_current_dimensions() {
		let mut engine = engine(ParticleConfig::default());
		let origin = SurfaceOrigin {
			left: 10.0,
			top: 20.0,
		};
		engine.on_pointer_move(260.0, 120.0, origin);
		assert_eq!(engine.pointer_offset(), PointerOffset { x: 50.0, y: -50.0 });

		engine.on_pointer_move(1000.0, 120.0, origin);
		assert_eq!(engine.pointer_offset(), PointerOffset { x: 50.0, y: -50.0 });
		assert_eq!(engine.pointer_position(), (1000.0, 120.0));
	}

	#[test]
	fn frames_without_surface_still_simulate() {
		let config = ParticleConfig {
			quantity: 4,
			..ParticleConfig::default()
		};
		let mut engine: TestEngine = ParticleEngine::init_with_rng(
			&config,
			None,
			ManualScheduler::default(),
			200.0,
			200.0,
			StdRng::seed_from_u64(5),
		)
		.unwrap();
		engine.on_visibility_change(true);
		let before = engine.particles().to_vec();
		engine.on_frame();
		assert_ne!(engine.particles(), &before[..]);
	}

	#[test]
	fn magnetism_converges_without_drift() {
		let config = ParticleConfig {
			quantity: 1,
			particle_speed: 0.0,
			..ParticleConfig::default()
		};
		let mut engine = engine(config);
		engine.on_pointer_move(300.0, 100.0, SurfaceOrigin::default());
		let mouse = engine.pointer_offset();
		assert_eq!(mouse, PointerOffset { x: 100.0, y: -50.0 });

		engine.on_visibility_change(true);
		let start = engine.particles()[0].clone();
		let target_x = mouse.x / (50.0 / start.magnetism);
		let target_y = mouse.y / (50.0 / start.magnetism);

		let (mut gap_x, mut gap_y) = (target_x.abs(), target_y.abs());
		for _ in 0..200 {
			engine.on_frame();
			let p = &engine.particles()[0];
			assert_eq!((p.x, p.y), (start.x, start.y));
			let (nx, ny) = ((target_x - p.translate_x).abs(), (target_y - p.translate_y).abs());
			assert!(nx < gap_x && ny < gap_y);
			(gap_x, gap_y) = (nx, ny);
		}
		assert!(gap_x < target_x.abs() * 0.05);
	}

	#[test]
	fn teardown_cancels_and_ignores_later_events() {
		let mut engine = engine(ParticleConfig::default());
		engine.on_visibility_change(true);
		assert_eq!(engine.pending_frame(), Some(FrameHandle(1)));
		engine.teardown();
		assert_eq!(engine.scheduler().cancelled, vec![FrameHandle(1)]);
		assert_eq!(engine.pending_frame(), None);
		assert!(!engine.in_view());

		engine.on_visibility_change(true);
		engine.on_frame();
		assert_eq!(requests(&engine), 1);
		assert_eq!(engine.loop_state(), LoopState::Idle);
	}
}
