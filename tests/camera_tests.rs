use glam::{Mat4, Vec3};
use learn_gpu::camera::{Camera, Direction, MAX_FIELD_OF_VIEW, MIN_FIELD_OF_VIEW, PITCH_LIMIT};
use learn_gpu::config::{CameraConfig, WindowConfig};
use learn_gpu::error::ConfigError;

const EPSILON: f32 = 1e-5;

fn camera_at(cursor: (u32, u32)) -> Camera {
    Camera::from_config(&CameraConfig {
        window: WindowConfig {
            width: cursor.0 * 2,
            height: cursor.1 * 2,
        },
        ..CameraConfig::default()
    })
    .unwrap()
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_default_camera_state() {
        let camera = Camera::default();

        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.forward(), Vec3::NEG_Z);
        assert_eq!(camera.world_up(), Vec3::Y);
        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.field_of_view(), 45.0);
        assert_eq!(camera.move_speed(), 2.5);
        assert_eq!(camera.look_sensitivity(), 0.1);
    }

    #[test]
    fn test_default_view_matrix_looks_down_negative_z() {
        let camera = Camera::default();
        let expected = Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

        assert!(camera.view_matrix().abs_diff_eq(expected, EPSILON));
        // looking down -Z from the origin the view is the identity
        assert!(camera.view_matrix().abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn test_config_seeds_cursor_at_window_center() {
        let camera = camera_at((400, 300));
        assert_eq!(camera.last_cursor(), (400.0, 300.0));
    }

    #[test]
    fn test_config_fields_are_applied() {
        let config = CameraConfig {
            move_speed: 4.0,
            look_sensitivity: 0.2,
            field_of_view: 30.0,
            yaw: -45.0,
            pitch: 10.0,
            position: [1.0, 2.0, 3.0],
            ..CameraConfig::default()
        };
        let camera = Camera::from_config(&config).unwrap();

        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.move_speed(), 4.0);
        assert_eq!(camera.look_sensitivity(), 0.2);
        assert_eq!(camera.field_of_view(), 30.0);
        assert_eq!(camera.yaw(), -45.0);
        assert_eq!(camera.pitch(), 10.0);
    }

    #[test]
    fn test_configured_vectors_are_normalized() {
        let camera = Camera::from_config(&CameraConfig {
            forward: [0.0, 0.0, -2.0],
            world_up: [0.0, 3.0, 0.0],
            ..CameraConfig::default()
        })
        .unwrap();

        assert!((camera.forward() - Vec3::NEG_Z).length() < EPSILON);
        assert!((camera.world_up() - Vec3::Y).length() < EPSILON);
        assert!((camera.right() - Vec3::X).length() < EPSILON);
    }

    #[test]
    fn test_forward_parallel_to_world_up_is_rejected() {
        for forward in [[0.0, 1.0, 0.0], [0.0, -4.0, 0.0]] {
            let err = Camera::from_config(&CameraConfig {
                forward,
                ..CameraConfig::default()
            })
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidVector { field: "forward", .. }));
        }
    }

    #[test]
    fn test_zero_vectors_are_rejected() {
        let err = Camera::from_config(&CameraConfig {
            forward: [0.0, 0.0, 0.0],
            ..CameraConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVector { field: "forward", .. }));

        let err = Camera::from_config(&CameraConfig {
            world_up: [0.0, 0.0, 0.0],
            ..CameraConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVector { field: "world_up", .. }));
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn test_forward_moves_are_linear() {
        let mut camera = Camera::default();
        let forward = camera.forward();

        for step in 1..=5 {
            camera.move_toward(Direction::Forward, 0.2);
            let expected = forward * camera.move_speed() * 0.2 * step as f32;
            assert!((camera.position - expected).length() < EPSILON);
        }
    }

    #[test]
    fn test_forward_follows_current_orientation() {
        let mut camera = camera_at((300, 300));
        camera.look(500.0, 250.0);
        let forward = camera.forward();
        let start = camera.position;

        camera.move_toward(Direction::Forward, 1.5);

        let moved = camera.position - start;
        assert!((moved - forward * 2.5 * 1.5).length() < EPSILON);
    }

    #[test]
    fn test_left_and_right_use_right_vector() {
        let mut camera = Camera::default();
        camera.move_toward(Direction::Right, 1.0);
        assert!((camera.position - Vec3::new(2.5, 0.0, 0.0)).length() < EPSILON);

        camera.move_toward(Direction::Left, 2.0);
        assert!((camera.position - Vec3::new(-2.5, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_scaled_forward_still_moves_at_move_speed() {
        let mut camera = Camera::from_config(&CameraConfig {
            forward: [0.0, 0.0, -2.0],
            ..CameraConfig::default()
        })
        .unwrap();

        camera.move_toward(Direction::Forward, 1.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, -2.5)).length() < EPSILON);

        camera.move_toward(Direction::Right, 1.0);
        assert!(camera.position.is_finite());
        assert!((camera.position - Vec3::new(2.5, 0.0, -2.5)).length() < EPSILON);
    }

    #[test]
    fn test_zero_elapsed_time_does_not_move() {
        let mut camera = Camera::default();
        camera.move_toward(Direction::Backward, 0.0);
        assert_eq!(camera.position, Vec3::ZERO);
    }
}

#[cfg(test)]
mod look_tests {
    use super::*;

    #[test]
    fn test_look_updates_yaw_only_for_horizontal_motion() {
        let mut camera = camera_at((100, 100));
        camera.look(110.0, 100.0);

        assert!((camera.yaw() - -89.0).abs() < EPSILON);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn test_moving_pointer_up_raises_pitch() {
        let mut camera = camera_at((100, 100));
        camera.look(100.0, 50.0);

        assert!((camera.pitch() - 5.0).abs() < EPSILON);
        assert!(camera.forward().y > 0.0);
    }

    #[test]
    fn test_repeated_look_is_idempotent() {
        let mut camera = camera_at((300, 300));
        camera.look(420.0, 170.0);
        let (yaw, pitch) = (camera.yaw(), camera.pitch());

        camera.look(420.0, 170.0);
        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = camera_at((300, 300));
        let sequence = [
            (300.0, -100_000.0),
            (300.0, 200_000.0),
            (50.0, -3.0),
            (1e6, 1e6),
            (-1e6, -1e6),
        ];

        for (x, y) in sequence {
            camera.look(x, y);
            assert!(camera.pitch() <= PITCH_LIMIT);
            assert!(camera.pitch() >= -PITCH_LIMIT);
        }
    }

    #[test]
    fn test_pitch_saturates_at_limit() {
        let mut camera = camera_at((300, 300));
        camera.look(300.0, -10_000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.look(300.0, 50_000.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut camera = camera_at((300, 300));
        let points = [
            (310.0, 290.0),
            (700.0, 10.0),
            (-250.0, 900.0),
            (0.0, 0.0),
            (300.0, -40_000.0),
        ];

        for (x, y) in points {
            camera.look(x, y);
            let (forward, right, up) = (camera.forward(), camera.right(), camera.up());

            assert!((forward.length() - 1.0).abs() < EPSILON);
            assert!(right.dot(up).abs() < EPSILON);
            assert!(right.dot(forward).abs() < EPSILON);
            assert!(up.dot(forward).abs() < EPSILON);
        }
    }

    #[test]
    fn test_forward_matches_spherical_angles() {
        let mut camera = camera_at((300, 300));
        camera.look(750.0, 100.0);

        let (yaw, pitch) = (camera.yaw().to_radians(), camera.pitch().to_radians());
        let expected = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin());
        assert!((camera.forward() - expected.normalize()).length() < EPSILON);
    }

    #[test]
    fn test_view_matrix_uses_world_up() {
        let mut camera = camera_at((300, 300));
        camera.look(500.0, 100.0);

        let expected = Mat4::look_at_rh(
            camera.position,
            camera.position + camera.forward(),
            camera.world_up(),
        );
        assert!(camera.view_matrix().abs_diff_eq(expected, EPSILON));
    }
}

#[cfg(test)]
mod zoom_tests {
    use super::*;

    #[test]
    fn test_zoom_scales_by_sensitivity() {
        let mut camera = Camera::default();
        camera.zoom(10.0);
        assert!((camera.field_of_view() - 44.5).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_converges_to_minimum() {
        let mut camera = Camera::default();
        for _ in 0..10 {
            camera.zoom(1000.0);
            assert_eq!(camera.field_of_view(), MIN_FIELD_OF_VIEW);
        }
    }

    #[test]
    fn test_zoom_out_is_capped() {
        let mut camera = Camera::default();
        camera.zoom(-1000.0);
        assert_eq!(camera.field_of_view(), MAX_FIELD_OF_VIEW);
    }

    #[test]
    fn test_field_of_view_stays_in_range() {
        let mut camera = Camera::default();
        for offset in [3.0, -7.5, 250.0, -0.25, 12.0, -900.0, 41.0] {
            camera.zoom(offset);
            let fov = camera.field_of_view();
            assert!((MIN_FIELD_OF_VIEW..=MAX_FIELD_OF_VIEW).contains(&fov));
        }
    }

    #[test]
    fn test_separate_zoom_sensitivity() {
        let mut camera = Camera::from_config(&CameraConfig {
            zoom_sensitivity: Some(1.0),
            ..CameraConfig::default()
        })
        .unwrap();
        camera.zoom(10.0);
        assert!((camera.field_of_view() - 40.0).abs() < EPSILON);
    }
}
