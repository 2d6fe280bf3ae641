use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::{Sphere, Cuboid};

use crate::lensing::scene::LensingScene;
use crate::lensing::states::NVec3;

/// Wireframe colour, blue at 70% opacity
const WIREFRAME_COLOR: Color = Color::srgba(0.0, 0.0, 1.0, 0.7);

/// Gizmo line width in pixels
const WIREFRAME_WIDTH: f32 = 1.0;

/// Radius of the mass marker in plot units
const MARKER_RADIUS: f32 = 0.15;

/// Camera distance from the origin, in plot units
const CAMERA_DISTANCE: f32 = 22.0;

/// Default 3D-plot viewpoint, degrees
const CAMERA_ELEVATION: f32 = 30.0;
const CAMERA_AZIMUTH: f32 = -60.0;

/// Plot coordinates are Z-up, bevy is Y-up
fn to_world(p: &NVec3) -> Vec3 {
    Vec3::new(p.x as f32, p.z as f32, -(p.y as f32))
}

/// Open the viewer and block until the window is closed
pub fn run_3d(scene: LensingScene) -> AppExit {
    log::info!("run_3d: starting Bevy viewer with {} wireframe slices", scene.surfaces.len());

    let window = Window {
        title: scene.labels.title.clone(),
        ..Default::default()
    };

    App::new()
        .insert_resource(scene)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                // env_logger owns log output
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, (setup_3d, configure_gizmos))
        .add_systems(Update, draw_wireframes)
        .run()
}

/// Startup system: spawn camera, axes, mass marker and the text overlay
fn setup_3d(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<LensingScene>,
) {
    let elev = CAMERA_ELEVATION.to_radians();
    let azim = CAMERA_AZIMUTH.to_radians();
    let eye = NVec3::new(
        (elev.cos() * azim.cos()) as f64,
        (elev.cos() * azim.sin()) as f64,
        elev.sin() as f64,
    ) * CAMERA_DISTANCE as f64;

    // Static camera, white background like a printed plot
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::WHITE),
            ..Default::default()
        },
        transform: Transform::from_translation(to_world(&eye))
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials, &scene.limits);

    // Mass marker
    commands.spawn(PbrBundle {
        mesh: meshes.add(Sphere::new(MARKER_RADIUS).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::BLACK,
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_translation(to_world(&scene.mass.position)),
        ..Default::default()
    });

    spawn_overlay(&mut commands, &scene);
}

fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = WIREFRAME_WIDTH;
}

/// Gizmos are immediate mode, so every frame redraws each lattice row and column
fn draw_wireframes(mut gizmos: Gizmos, scene: Res<LensingScene>) {
    for surface in &scene.surfaces {
        for i in 0..surface.rows {
            gizmos.linestrip(surface.row(i).iter().map(to_world), WIREFRAME_COLOR);
        }
        for j in 0..surface.cols {
            gizmos.linestrip(surface.column(j).iter().map(to_world), WIREFRAME_COLOR);
        }
    }
}

// =========================================================================================
// Axes along the lower edges of the plot box
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>, limits: &[(f64, f64); 3]) {
    let [(x0, x1), (y0, y1), (z0, z1)] = *limits;
    let thickness = 0.02;

    // (plot-space centre, world-space size, colour) per axis
    let axes = [
        (
            NVec3::new(0.5 * (x0 + x1), y0, z0),
            Vec3::new((x1 - x0) as f32, thickness, thickness),
            Color::srgb(1.0, 0.0, 0.0), // X: red
        ),
        (
            NVec3::new(x0, 0.5 * (y0 + y1), z0),
            Vec3::new(thickness, thickness, (y1 - y0) as f32),
            Color::srgb(0.0, 0.6, 0.0), // Y: green
        ),
        (
            NVec3::new(x0, y0, 0.5 * (z0 + z1)),
            Vec3::new(thickness, (z1 - z0) as f32, thickness),
            Color::srgb(0.0, 0.0, 1.0), // Z: blue
        ),
    ];

    for (centre, size, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_translation(to_world(&centre)),
            ..Default::default()
        });
    }
}

/// Title, legend and axis key as screen-space text
fn spawn_overlay(commands: &mut Commands, scene: &LensingScene) {
    let style = |size: f32| TextStyle {
        font_size: size,
        color: Color::BLACK,
        ..Default::default()
    };

    let [x, y, z] = &scene.labels.axes;
    let lines = [
        (scene.labels.title.clone(), 22.0, Val::Px(10.0), Val::Px(10.0)),
        (format!("\u{25CF} {}", scene.labels.legend), 16.0, Val::Px(40.0), Val::Px(10.0)),
        (format!("{x}: red   {y}: green   {z}: blue"), 14.0, Val::Px(62.0), Val::Px(10.0)),
    ];

    for (text, size, top, left) in lines {
        commands.spawn(
            TextBundle::from_section(text, style(size)).with_style(Style {
                position_type: PositionType::Absolute,
                top,
                left,
                ..Default::default()
            }),
        );
    }
}
