//! Frame lifecycle against a real device. Each test returns early when the
//! host has no GPU adapter.

use wgpu_flycam::geometry::{make_box, make_triangle, MeshData};
use wgpu_flycam::{Camera, FrameStatus, InitError, Renderer, RendererState};

fn ready_renderer() -> Option<Renderer> {
    let mut renderer = Renderer::headless();
    match pollster::block_on(renderer.init()) {
        Ok(()) => Some(renderer),
        Err(InitError::NoAdapter) => {
            eprintln!("no GPU adapter available, skipping");
            None
        }
        Err(e) => {
            eprintln!("device unavailable ({e}), skipping");
            None
        }
    }
}

#[test]
fn lifecycle_reaches_frame_encoded() {
    let Some(mut renderer) = ready_renderer() else {
        return;
    };
    assert_eq!(renderer.state(), RendererState::DeviceReady);

    renderer.resize_backings(64, 64).unwrap();
    assert_eq!(renderer.state(), RendererState::BackingsSized);

    renderer.add_mesh(&make_box(0.7)).unwrap();
    let camera = Camera::default();
    assert_eq!(renderer.encode_commands(&camera).unwrap(), FrameStatus::Submitted);
    assert_eq!(renderer.state(), RendererState::FrameEncoded);

    assert_eq!(renderer.encode_commands(&camera).unwrap(), FrameStatus::Submitted);
    assert_eq!(renderer.state(), RendererState::FrameEncoded);
}

#[test]
fn encode_before_resize_is_rejected() {
    let Some(mut renderer) = ready_renderer() else {
        return;
    };
    let err = renderer.encode_commands(&Camera::default()).unwrap_err();
    assert!(matches!(err, wgpu_flycam::RenderError::BackingsNotSized));
    assert_eq!(renderer.state(), RendererState::DeviceReady);
}

#[test]
fn resize_replaces_backings() {
    let Some(mut renderer) = ready_renderer() else {
        return;
    };

    renderer.resize_backings(32, 16).unwrap();
    let depth = renderer.depth_texture().unwrap();
    assert_eq!((depth.width(), depth.height()), (32, 16));
    assert_eq!(depth.format(), wgpu_flycam::render::DEPTH_FORMAT);

    renderer.resize_backings(48, 40).unwrap();
    assert_eq!(renderer.backing_size(), Some((48, 40)));
    let depth = renderer.depth_texture().unwrap();
    assert_eq!((depth.width(), depth.height()), (48, 40));
    let color = renderer.color_texture().unwrap();
    assert_eq!((color.width(), color.height()), (48, 40));
    assert!(color
        .usage()
        .contains(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC));

    // the replaced backings are fully usable
    renderer.add_mesh(&make_triangle(1.0)).unwrap();
    assert_eq!(
        renderer.encode_commands(&Camera::default()).unwrap(),
        FrameStatus::Submitted
    );
}

#[test]
fn zero_sized_resize_keeps_previous_backings() {
    let Some(mut renderer) = ready_renderer() else {
        return;
    };
    renderer.resize_backings(20, 20).unwrap();
    renderer.resize_backings(0, 20).unwrap();
    assert_eq!(renderer.backing_size(), Some((20, 20)));
}

#[test]
fn mesh_buffers_are_four_byte_aligned() {
    let Some(mut renderer) = ready_renderer() else {
        return;
    };
    // 3 indices = 6 bytes
    let mesh = renderer.add_mesh(&make_triangle(0.5)).unwrap();
    assert_eq!(mesh.index_count, 3);
    assert_eq!(mesh.index_buffer.size(), 8);
    assert_eq!(mesh.position_buffer.size(), 36);
    assert_eq!(mesh.color_buffer.size(), 48);
}

#[test]
fn repeated_adds_accumulate() {
    let Some(mut renderer) = ready_renderer() else {
        return;
    };
    let data = make_box(0.7);
    renderer.add_mesh(&data).unwrap();
    renderer.add_mesh(&data).unwrap();
    renderer
        .add_mesh(&MeshData::new(vec![0.0; 9], vec![1.0; 12], vec![0, 1, 2]))
        .unwrap();
    assert_eq!(renderer.meshes().len(), 3);

    renderer.resize_backings(16, 16).unwrap();
    assert_eq!(
        renderer.encode_commands(&Camera::default()).unwrap(),
        FrameStatus::Submitted
    );
}
