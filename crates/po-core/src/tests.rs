//! Unit tests for po-core primitives.

#[cfg(test)]
mod ids {
    use crate::ActorId;

    #[test]
    fn index_roundtrip() {
        let id = ActorId(5);
        assert_eq!(id.index(), 5);
        assert_eq!(ActorId::try_from(5usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ActorId(0) < ActorId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(ActorId::INVALID.0, u32::MAX);
        assert_eq!(ActorId::default(), ActorId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Vec2, clamp01, ease};

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.1, 0.2);
        let b = Vec2::new(0.5, 0.8);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 0.3).abs() < 1e-6);
        assert!((mid.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn dist_345_triangle() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.3, 0.4);
        assert!((a.dist(b) - 0.5).abs() < 1e-6);
        assert!((a.dist_sq(b) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn clamp_unit_and_validity() {
        let p = Vec2::new(-0.5, 1.5).clamp_unit();
        assert_eq!(p, Vec2::new(0.0, 1.0));
        assert!(p.in_unit());
        assert!(!Vec2::new(f32::NAN, 0.5).in_unit());
        assert!(!Vec2::new(0.5, 1.2).in_unit());
    }

    #[test]
    fn ease_fixed_points() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(0.5), 0.5);
        // 3t² − 2t³ at t = 0.25 — exact in binary floats.
        assert_eq!(ease(0.25), 0.15625);
    }

    #[test]
    fn ease_clamps_and_is_symmetric() {
        assert_eq!(ease(-3.0), 0.0);
        assert_eq!(ease(4.5), 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((ease(t) + ease(1.0 - t) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn ease_is_monotone() {
        let mut prev = ease(0.0);
        for i in 1..=100 {
            let v = ease(i as f32 / 100.0);
            assert!(v >= prev, "ease dipped at step {i}");
            prev = v;
        }
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-1.0), 0.0);
        assert_eq!(clamp01(2.0), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameClock, Millis};

    #[test]
    fn millis_arithmetic() {
        assert_eq!(Millis(500.0) - Millis(200.0), 300.0);
        assert_eq!(Millis(100.0) + 50.0, Millis(150.0));
        assert_eq!(Millis(100.0).offset(-25.0), Millis(75.0));
    }

    #[test]
    fn first_tick_establishes_mount() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.elapsed_ms(), 0.0);
        let d = clock.tick(Millis(1_000.0));
        assert_eq!(d, 0.0);
        assert_eq!(clock.elapsed_ms(), 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn deltas_accumulate() {
        let mut clock = FrameClock::new();
        clock.tick(Millis(1_000.0));
        let d = clock.tick(Millis(1_016.0));
        assert_eq!(d, 16.0);
        assert_eq!(clock.elapsed_ms(), 16.0);
        clock.tick(Millis(1_048.0));
        assert_eq!(clock.elapsed_ms(), 48.0);
        assert_eq!(clock.frame(), 3);
    }

    #[test]
    fn regressed_timestamp_clamps_delta() {
        let mut clock = FrameClock::new();
        clock.tick(Millis(1_000.0));
        clock.tick(Millis(1_100.0));
        // Host clock jumped backwards: accept the new now, report no delta.
        let d = clock.tick(Millis(900.0));
        assert_eq!(d, 0.0);
        assert_eq!(clock.now(), Millis(900.0));
        assert_eq!(clock.elapsed_ms(), 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SceneRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SceneRng::new(12345);
        let mut r2 = SceneRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn child_stream_diverges() {
        let mut root = SceneRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        assert_ne!(a.uniform(), b.uniform());
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = SceneRng::new(0);
        for _ in 0..1_000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_ms_in_bounds() {
        let mut rng = SceneRng::new(0);
        for _ in 0..1_000 {
            let v = rng.range_ms(8_000.0, 15_000.0);
            assert!((8_000.0..15_000.0).contains(&v));
        }
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = SceneRng::new(7);
        let mut v: Vec<u32> = (0..8).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }

}

#[cfg(test)]
mod hash {
    use crate::hash::{ident_hash, ident_hash_ms};

    #[test]
    fn pinned_values() {
        // These values are load-bearing: bubble phases derive from them.
        assert_eq!(ident_hash(""), 0);
        assert_eq!(ident_hash("a"), 97);
        assert_eq!(ident_hash("arnar"), 93_086_542);
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(ident_hash("ab"), ident_hash("ba"));
        assert_eq!(ident_hash("ab"), 3_105);
        assert_eq!(ident_hash("ba"), 3_135);
    }

    #[test]
    fn wraps_instead_of_overflowing() {
        // Long input must wrap silently, never panic.
        let long = "stormur".repeat(100);
        let _ = ident_hash(&long);
    }

    #[test]
    fn non_bmp_uses_surrogate_pairs() {
        // U+1F980 encodes as two UTF-16 units; both must contribute.
        assert_eq!(ident_hash("\u{1F980}"), 1_772_802);
    }

    #[test]
    fn ms_variant_matches() {
        assert_eq!(ident_hash_ms("a"), 97.0);
    }
}

#[cfg(test)]
mod activity {
    use crate::ActivityKind;

    #[test]
    fn pairing() {
        assert!(ActivityKind::WaterCooler.is_paired());
        assert!(ActivityKind::Meeting.is_paired());
        assert!(ActivityKind::Visit.is_paired());
        assert!(!ActivityKind::Coffee.is_paired());
    }

    #[test]
    fn display() {
        assert_eq!(ActivityKind::WaterCooler.to_string(), "water-cooler");
        assert_eq!(ActivityKind::Coffee.to_string(), "coffee");
    }

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(ActivityKind::ALL.len(), 4);
    }
}

#[cfg(test)]
mod quality {
    use crate::Quality;

    #[test]
    fn lenient_labels() {
        assert_eq!(Quality::from_label("high"), Quality::High);
        assert_eq!(Quality::from_label(" High "), Quality::High);
        assert_eq!(Quality::from_label("LOW"), Quality::Low);
        assert_eq!(Quality::from_label("ultra"), Quality::Medium);
        assert_eq!(Quality::from_label(""), Quality::Medium);
    }

    #[test]
    fn particle_counts_scale() {
        assert!(Quality::Low.particle_count() < Quality::Medium.particle_count());
        assert!(Quality::Medium.particle_count() < Quality::High.particle_count());
        assert_eq!(Quality::Medium.particle_count(), 30);
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Quality::default(), Quality::Medium);
    }
}
