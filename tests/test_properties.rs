use proptest::prelude::*;

use flappy_term::bird::Bird;
use flappy_term::compute::{advance_obstacles, fall, Flight};
use flappy_term::config::GameConfig;
use flappy_term::entities::{Obstacle, Orientation, Rect};

fn in_band(f: &Flight, c: &GameConfig) -> bool {
    let half = c.bird_h / 2;
    f.y - half >= c.floor && f.y + half <= c.window_height
}

fn obstacle(x: i32) -> Obstacle {
    Obstacle {
        rect: Rect::new(x, 0, 50, 100),
        orientation: Orientation::Inverted,
    }
}

proptest! {
    #[test]
    fn flight_stays_in_band(jumps in prop::collection::vec(any::<bool>(), 1..600)) {
        let c = GameConfig::default();
        let mut f = Flight::at_rest(c.spawn_y);
        for jump in jumps {
            if jump {
                f.velocity = -c.jump_speed;
            }
            f = fall(&f, &c);
            prop_assert!(in_band(&f, &c), "out of band: {:?}", f);
        }
    }

    #[test]
    fn fall_adds_exactly_gravity(y in 101i32..=579, velocity in -50.0f64..50.0) {
        let c = GameConfig::default();
        let before = Flight { y, velocity, angle: 0.0 };
        let after = fall(&before, &c);
        prop_assert_eq!(after.velocity, velocity + c.gravity);
        prop_assert!(after.angle <= c.max_angle);
    }

    #[test]
    fn restart_while_alive_changes_nothing(
        steps in prop::collection::vec(any::<bool>(), 0..100),
    ) {
        let bird = Bird::new(&GameConfig::default());
        for jump in steps {
            if jump {
                bird.apply_impulse();
            }
            bird.update();
        }
        let before = bird.flight();
        bird.restart();
        prop_assert_eq!(bird.flight(), before);
        prop_assert!(bird.is_alive());
    }

    #[test]
    fn advance_preserves_order_and_never_resurrects(
        xs in prop::collection::vec(-49i32..1000, 0..30),
        speed in 1i32..10,
        steps in 0usize..120,
    ) {
        let mut xs = xs;
        xs.sort_unstable();
        let mut obstacles: Vec<Obstacle> = xs.iter().copied().map(obstacle).collect();
        let mut len = obstacles.len();
        for _ in 0..steps {
            obstacles = advance_obstacles(obstacles, speed);
            prop_assert!(obstacles.len() <= len);
            len = obstacles.len();
        }

        let expected: Vec<i32> = xs
            .iter()
            .map(|x| x - speed * steps as i32)
            .filter(|x| x + 50 > 0)
            .collect();
        let actual: Vec<i32> = obstacles.iter().map(|o| o.rect.x).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn intersection_is_symmetric(
        ax in -100i32..900, ay in -100i32..700, aw in 0i32..200, ah in 0i32..200,
        bx in -100i32..900, by in -100i32..700, bw in 0i32..200, bh in 0i32..200,
    ) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        let x_overlap = ax.max(bx) < (ax + aw).min(bx + bw);
        let y_overlap = ay.max(by) < (ay + ah).min(by + bh);
        prop_assert_eq!(a.intersects(&b), x_overlap && y_overlap);
    }
}
