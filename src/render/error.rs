use thiserror::Error;

/// Reasons device acquisition can fail. The renderer stays uninitialized after any of them.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no GPU entry point for this surface: {0}")]
    UnsupportedPlatform(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("GPU device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("renderer has no device, init() has not succeeded")]
    NotInitialized,
    #[error("backing textures are not sized, call resize_backings() first")]
    BackingsNotSized,
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
