//! The billboard draw pass: one textured, camera-facing quad per
//! visible image.

use std::sync::Arc;

use glam::Vec3;
use wgpu::util::DeviceExt;

use super::buffer::TypedBuffer;
use super::render_context::RenderContext;
use super::texture::{ImageTexture, RenderTarget};
use crate::camera::{Camera, CameraUniform};
use crate::scene::GalleryFrame;

/// Per-instance data for one billboard quad.
/// Must match the WGSL InstanceInput struct layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BillboardInstance {
    /// xyz = world position, w = opacity
    pub pos_opacity: [f32; 4],
    /// Billboard orientation quaternion (xyzw)
    pub rotation: [f32; 4],
    /// xy = plane size, zw unused
    pub size: [f32; 4],
}

/// Renders a [`GalleryFrame`] into a caller-supplied texture view.
///
/// Sprites without a loaded texture draw against a white placeholder,
/// so a plane is visible (fading in) before its thumbnail lands.
pub struct GalleryRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    /// Per-image texture layout; [`ImageTexture`] bind groups are built
    /// against this.
    pub image_layout: wgpu::BindGroupLayout,
    /// Shared sampler for all image textures.
    pub sampler: wgpu::Sampler,
    placeholder: ImageTexture,
    instances: TypedBuffer<BillboardInstance>,
    depth: RenderTarget,
    clear_color: wgpu::Color,
}

impl GalleryRenderer {
    /// Build the billboard pipeline against the context's target format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;

        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/billboard.wgsl"));

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let image_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Image Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Image Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let placeholder = ImageTexture::placeholder(
            device,
            &context.queue,
            &image_layout,
            &sampler,
        );

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Billboard Pipeline Layout"),
                bind_group_layouts: &[&camera_layout, &image_layout],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Billboard Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: size_of::<BillboardInstance>()
                            as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x4,
                            1 => Float32x4,
                            2 => Float32x4,
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let instances = TypedBuffer::with_capacity(
            device,
            "Billboard Instances",
            256,
            wgpu::BufferUsages::VERTEX,
        );
        let depth = RenderTarget::depth(device, context.width, context.height);

        Self {
            pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            image_layout,
            sampler,
            placeholder,
            instances,
            depth,
            clear_color: wgpu::Color::BLACK,
        }
    }

    /// Recreate the depth buffer after the target geometry changed.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth =
            RenderTarget::depth(&context.device, context.width, context.height);
    }

    /// Draw the frame into `target`, clearing it first.
    pub fn render(
        &mut self,
        context: &RenderContext,
        target: &wgpu::TextureView,
        camera: &Camera,
        frame: &GalleryFrame<Arc<ImageTexture>>,
    ) {
        self.camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        // Back-to-front so alpha blending composes correctly while
        // entering planes overlap near the origin.
        let order = draw_order(frame, camera.eye);
        let instances: Vec<BillboardInstance> = order
            .iter()
            .map(|&i| {
                let sprite = &frame.sprites[i];
                BillboardInstance {
                    pos_opacity: [
                        sprite.position.x,
                        sprite.position.y,
                        sprite.position.z,
                        sprite.opacity,
                    ],
                    rotation: sprite.orientation.to_array(),
                    size: [sprite.size[0], sprite.size[1], 0.0, 0.0],
                }
            })
            .collect();
        let _ = self
            .instances
            .write(&context.device, &context.queue, &instances);

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Billboard Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.clear_color),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, self.instances.buffer().slice(..));

            // One draw per sprite: each binds its own texture
            for (slot, &i) in order.iter().enumerate() {
                let bind_group = frame.sprites[i]
                    .texture
                    .as_ref()
                    .map_or(&self.placeholder.bind_group, |t| &t.bind_group);
                pass.set_bind_group(1, bind_group, &[]);
                let slot = slot as u32;
                pass.draw(0..6, slot..slot + 1);
            }
        }
        context.submit(encoder);
    }
}

/// Sprite indices sorted back-to-front relative to `eye`.
fn draw_order<H>(frame: &GalleryFrame<H>, eye: Vec3) -> Vec<usize> {
    let mut order: Vec<usize> = (0..frame.sprites.len()).collect();
    order.sort_by(|&a, &b| {
        let da = frame.sprites[a].position.distance_squared(eye);
        let db = frame.sprites[b].position.distance_squared(eye);
        db.total_cmp(&da)
    });
    order
}
