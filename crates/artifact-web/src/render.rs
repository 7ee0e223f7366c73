use artifact_core::{SceneController, SceneRenderer};
use glam::{Mat3, Mat4};
use web_sys as web;

mod helpers;
mod mesh;
use mesh::{GpuMesh, Vertex};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    normal_mat: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
}

impl FrameUniforms {
    fn from_scene(scene: &SceneController, model: Mat4) -> Self {
        let cam = scene.camera();
        let lights = scene.lights();
        let a = &lights.ambient;
        let p = &lights.point;
        let normal_mat = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());
        Self {
            view_proj: cam.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_mat: normal_mat.to_cols_array_2d(),
            camera_pos: cam.eye.extend(1.0).to_array(),
            ambient: [
                a.color[0] * a.intensity,
                a.color[1] * a.intensity,
                a.color[2] * a.intensity,
                0.0,
            ],
            light_pos: p.position.extend(p.range).to_array(),
            light_color: [
                p.color[0] * p.intensity,
                p.color[1] * p.intensity,
                p.color[2] * p.intensity,
                0.0,
            ],
        }
    }
}

/// WebGPU state for drawing the artifact onto the scene canvas.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    material_layout: wgpu::BindGroupLayout,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    meshes: Option<Vec<GpuMesh>>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas so the page background shows around the artifact
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("artifact_shader"),
            source: wgpu::ShaderSource::Wgsl(artifact_core::ARTIFACT_WGSL.into()),
        });
        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_layout_entry(
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material_bgl"),
            entries: &[helpers::uniform_layout_entry(wgpu::ShaderStages::FRAGMENT)],
        });
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_ubo"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("artifact_pl"),
            bind_group_layouts: &[&frame_layout, &material_layout],
            push_constant_ranges: &[],
        });
        let pipeline =
            helpers::make_mesh_pipeline(&device, &pipeline_layout, &shader, Vertex::layout(), format);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        log::info!("[gpu] surface {}x{} {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            frame_buffer,
            frame_bind_group,
            material_layout,
            depth_tex,
            depth_view,
            meshes: None,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
        }
    }

    fn upload_artifact(&mut self, scene: &SceneController) {
        if self.meshes.is_some() {
            return;
        }
        if let Some(artifact) = scene.artifact() {
            let meshes: Vec<GpuMesh> = artifact
                .meshes
                .iter()
                .map(|m| mesh::upload_mesh(&self.device, &self.material_layout, m))
                .collect();
            log::info!("[gpu] uploaded {} artifact meshes", meshes.len());
            self.meshes = Some(meshes);
        }
    }

    pub fn draw(&mut self, scene: &SceneController) -> Result<(), wgpu::SurfaceError> {
        self.upload_artifact(scene);
        let model = scene
            .artifact()
            .map(|a| a.model_matrix())
            .unwrap_or(Mat4::IDENTITY);
        let uniforms = FrameUniforms::from_scene(scene, model);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(meshes) = &self.meshes {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.frame_bind_group, &[]);
                for m in meshes {
                    rpass.set_bind_group(1, &m.material_bind_group, &[]);
                    rpass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
                    rpass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..m.index_count, 0, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl SceneRenderer for GpuState {
    fn render(&mut self, scene: &SceneController) -> anyhow::Result<()> {
        self.draw(scene)
            .map_err(|e| anyhow::anyhow!(format!("surface error: {:?}", e)))
    }
}
