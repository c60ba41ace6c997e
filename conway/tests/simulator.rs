use std::time::{Duration, Instant};

use conway::{
    runner, Board, Color, ConfigError, Palette, Pattern, Rule, Simulator, SimulatorConfig,
    Surface, TickOutcome, CELL_SIZE,
};
use tokio::sync::oneshot;

/// Records every painted rectangle with the fill it was painted in.
#[derive(Default)]
struct Recorder {
    fill: Option<Color>,
    rects: Vec<(Color, f32, f32, f32, f32)>,
}

impl Surface for Recorder {
    fn set_fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let color = self.fill.expect("fill_rect before set_fill");
        self.rects.push((color, x, y, width, height));
    }
}

const INTERVAL: Duration = Duration::from_millis(100);

fn simulator(size: usize) -> Simulator<Recorder> {
    let config = SimulatorConfig::new(size, INTERVAL).with_seed(1234);
    Simulator::new(Recorder::default(), config).unwrap()
}

fn board(size: usize, cells: &[u8]) -> Board {
    Board::from_cells(size, cells.iter().map(|&c| c == 1).collect()).unwrap()
}

#[test]
fn construction_rejects_zero_size_and_interval() {
    assert_eq!(
        Simulator::create(Recorder::default(), 0, 100).err(),
        Some(ConfigError::ZeroSize)
    );
    assert_eq!(
        Simulator::create(Recorder::default(), 10, 0).err(),
        Some(ConfigError::ZeroInterval)
    );
}

#[test]
fn construction_rejects_overflowing_size() {
    let config = SimulatorConfig::new(usize::MAX, INTERVAL);
    assert_eq!(config.validate(), Err(ConfigError::SizeOverflow(usize::MAX)));
    assert_eq!(
        Simulator::new(Recorder::default(), config).err(),
        Some(ConfigError::SizeOverflow(usize::MAX))
    );
}

#[test]
fn construction_does_not_start() {
    let sim = simulator(5);
    assert!(!sim.is_running());
    assert_eq!(sim.board().len(), 25);
    assert!(sim.surface().rects.is_empty());
}

#[test]
fn start_seeds_draws_and_arms_one_tick() {
    let t0 = Instant::now();
    let mut sim = simulator(6);
    sim.start(t0);

    assert!(sim.is_running());
    assert_eq!(sim.next_tick_at(), Some(t0 + INTERVAL));
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.surface().rects.len(), 36);
}

#[test]
fn draw_paints_every_cell_at_its_grid_position() {
    let mut sim = simulator(3);
    sim.load_board(board(3, &[0, 1, 0, 0, 0, 0, 0, 0, 0])).unwrap();

    let rects = &sim.surface().rects;
    assert_eq!(rects.len(), 9);
    // Index 1 is row 0, col 1.
    assert_eq!(rects[1], (Color::BLACK, CELL_SIZE, 0.0, CELL_SIZE, CELL_SIZE));
    // Index 5 is row 1, col 2.
    assert_eq!(rects[5], (Color::WHITE, 2.0 * CELL_SIZE, CELL_SIZE, CELL_SIZE, CELL_SIZE));
}

#[test]
fn poll_waits_for_the_deadline() {
    let t0 = Instant::now();
    let mut sim = simulator(8);
    sim.start(t0);

    assert_eq!(sim.poll(t0 + INTERVAL / 2), None);
    assert_eq!(sim.generation(), 0);
    assert!(sim.poll(t0 + INTERVAL).is_some());
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.next_tick_at(), Some(t0 + 2 * INTERVAL));
}

#[test]
fn tick_advances_blinker_and_rearms() {
    let t0 = Instant::now();
    let mut sim = simulator(5);
    sim.start(t0);
    sim.load_pattern(Pattern::find("Blinker").unwrap());
    let start = sim.board().clone();

    assert_eq!(sim.tick(t0), TickOutcome::Advanced { alive: 3 });
    assert_ne!(sim.board(), &start);
    assert!(sim.is_running());
    assert_eq!(sim.tick(t0 + INTERVAL), TickOutcome::Advanced { alive: 3 });
    assert_eq!(sim.board(), &start);
    assert_eq!(sim.generation(), 2);
}

#[test]
fn lone_center_goes_extinct_and_reseeds() {
    let t0 = Instant::now();
    let mut sim = simulator(3);
    sim.start(t0);
    sim.load_board(board(3, &[0, 0, 0, 0, 1, 0, 0, 0, 0])).unwrap();

    assert_eq!(sim.tick(t0), TickOutcome::Reseeded);
    assert!(sim.is_running());
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.next_tick_at(), Some(t0 + INTERVAL));
}

#[test]
fn crowded_board_goes_extinct_and_reseeds() {
    let t0 = Instant::now();
    let mut sim = simulator(3);
    sim.start(t0);
    sim.load_board(board(3, &[1; 9])).unwrap();

    assert_eq!(sim.tick(t0), TickOutcome::Reseeded);
    assert!(sim.is_running());
}

#[test]
fn a_tick_is_always_pending_while_running() {
    let mut now = Instant::now();
    let mut sim = simulator(4);
    sim.start(now);

    for _ in 0..200 {
        now += INTERVAL;
        assert!(sim.poll(now).is_some());
        assert_eq!(sim.next_tick_at(), Some(now + INTERVAL));
    }
}

#[test]
fn stop_twice_is_harmless() {
    let t0 = Instant::now();
    let mut sim = simulator(5);
    sim.start(t0);
    sim.stop();
    sim.stop();

    assert!(!sim.is_running());
    assert_eq!(sim.poll(t0 + 10 * INTERVAL), None);
    assert_eq!(sim.generation(), 0);
}

#[test]
fn stepping_a_stopped_simulator_keeps_it_stopped() {
    let t0 = Instant::now();
    let mut sim = simulator(5);
    sim.start(t0);
    sim.stop();

    sim.tick(t0);
    assert!(!sim.is_running());
    assert_eq!(sim.poll(t0 + 10 * INTERVAL), None);
}

#[test]
fn extinction_while_stopped_reseeds_without_arming() {
    let t0 = Instant::now();
    let mut sim = simulator(3);
    sim.load_board(board(3, &[1; 9])).unwrap();

    assert_eq!(sim.tick(t0), TickOutcome::Reseeded);
    assert!(!sim.is_running());
    assert_eq!(sim.generation(), 0);
}

#[test]
fn stop_before_start_is_a_no_op() {
    let mut sim = simulator(5);
    sim.stop();
    assert!(!sim.is_running());
}

#[test]
fn restart_while_running_keeps_a_single_tick() {
    let t0 = Instant::now();
    let mut sim = simulator(10);
    sim.start(t0);
    sim.start(t0 + INTERVAL / 2);

    assert_eq!(sim.next_tick_at(), Some(t0 + INTERVAL / 2 + INTERVAL));
    assert_eq!(sim.poll(t0 + INTERVAL), None);
    assert!(sim.poll(t0 + INTERVAL / 2 + INTERVAL).is_some());
    assert_eq!(sim.generation(), 1);
}

#[test]
fn resume_keeps_the_board() {
    let t0 = Instant::now();
    let mut sim = simulator(7);
    sim.start(t0);
    sim.stop();
    let paused = sim.board().clone();

    sim.resume(t0 + INTERVAL);
    assert_eq!(sim.board(), &paused);
    assert_eq!(sim.next_tick_at(), Some(t0 + 2 * INTERVAL));

    sim.resume(t0 + 5 * INTERVAL);
    assert_eq!(sim.next_tick_at(), Some(t0 + 2 * INTERVAL));
}

#[test]
fn toggle_repaints_one_cell() {
    let mut sim = simulator(4);
    sim.load_board(Board::dead(4)).unwrap();
    let before = sim.surface().rects.len();

    sim.toggle_cell(2, 3);
    assert!(sim.board().is_alive(11));
    assert_eq!(sim.surface().rects.len(), before + 1);
    assert_eq!(
        sim.surface().rects.last(),
        Some(&(Color::BLACK, 3.0 * CELL_SIZE, 2.0 * CELL_SIZE, CELL_SIZE, CELL_SIZE))
    );
}

#[test]
fn load_board_rejects_other_sizes() {
    let mut sim = simulator(4);
    assert_eq!(
        sim.load_board(Board::dead(3)),
        Err(ConfigError::BoardLength { expected: 16, got: 9 })
    );
}

#[test]
fn inverted_rule_keeps_crowds_alive() {
    let t0 = Instant::now();
    let config = SimulatorConfig::new(3, INTERVAL).with_rule(Rule::Inverted).with_seed(9);
    let mut sim = Simulator::new(Recorder::default(), config).unwrap();
    sim.load_board(board(3, &[1; 9])).unwrap();

    assert_eq!(sim.tick(t0), TickOutcome::Advanced { alive: 9 });
}

#[test]
fn random_palette_paints_with_a_new_color_each_seed() {
    let t0 = Instant::now();
    let config = SimulatorConfig::new(4, INTERVAL)
        .with_palette(Palette::random_alive(Color::WHITE))
        .with_seed(5);
    let mut sim = Simulator::new(Recorder::default(), config).unwrap();

    let colors: Vec<Color> = (0..6)
        .map(|_| {
            sim.start(t0);
            sim.palette().alive
        })
        .collect();
    assert!(colors.windows(2).any(|w| w[0] != w[1]));
    assert!(sim
        .surface()
        .rects
        .iter()
        .all(|&(c, ..)| c == Color::WHITE || colors.contains(&c)));
}

#[tokio::test(start_paused = true)]
async fn runner_ticks_until_shutdown() {
    let mut sim = simulator(16);
    let (tx, rx) = oneshot::channel();

    let stopper = async move {
        tokio::time::sleep(Duration::from_millis(1050)).await;
        let _ = tx.send(());
    };
    let (ticks, ()) = tokio::join!(runner::run(&mut sim, rx), stopper);

    assert!((9..=10).contains(&ticks), "ticks = {ticks}");
    assert!(!sim.is_running());
}

#[tokio::test(start_paused = true)]
async fn runner_exits_when_sender_is_dropped() {
    let mut sim = simulator(8);
    let (tx, rx) = oneshot::channel::<()>();
    drop(tx);

    let ticks = runner::run(&mut sim, rx).await;
    assert_eq!(ticks, 0);
    assert!(!sim.is_running());
}
