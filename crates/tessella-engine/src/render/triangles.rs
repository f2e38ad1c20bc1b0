use bytemuck::{Pod, Zeroable};

use crate::paint::{Color, FillMode};
use crate::scene::Painter;

use super::{RenderCtx, RenderTarget};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SceneVertex {
    pos: [f32; 3],
    color: [f32; 3],
}

impl SceneVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position (clip space)
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Renders the painter's recorded triangle stream.
///
/// Two pipelines share one shader: a TriangleList pipeline for filled
/// rendering and a LineList pipeline for outline mode, with triangle edges
/// expanded CPU-side. Colors are clamped to [0, 1] at upload; the scene
/// layer stores them uninterpreted.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    staging: Vec<SceneVertex>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the target with the painter's clear color and draws the
    /// recorded stream in paint order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        painter: &Painter,
        fill_mode: FillMode,
    ) {
        self.ensure_pipelines(ctx);
        self.build_staging(painter, fill_mode);

        // Mutating methods must happen before borrowing pipelines immutably.
        if !self.staging.is_empty() {
            self.ensure_vbo_capacity(ctx, self.staging.len());
            if let Some(vbo) = self.vbo.as_ref() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.staging));
            }
        }

        let clear = painter.clear_color().clamped();
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessella scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if self.staging.is_empty() {
            return;
        }

        let pipeline = match fill_mode {
            FillMode::Filled => self.fill_pipeline.as_ref(),
            FillMode::Outline => self.line_pipeline.as_ref(),
        };
        let (Some(pipeline), Some(vbo)) = (pipeline, self.vbo.as_ref()) else {
            return;
        };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.staging.len() as u32, 0..1);
    }

    /// Flattens the painter's stream into GPU vertices, in paint order.
    ///
    /// Outline mode expands each triangle into its three edges for the
    /// LineList topology.
    fn build_staging(&mut self, painter: &Painter, fill_mode: FillMode) {
        self.staging.clear();

        for tri in painter.triangles() {
            let Color { r, g, b } = tri.color.clamped();
            let color = [r, g, b];
            let verts = tri.vertices.map(|v| SceneVertex {
                pos: [v.x, v.y, v.z],
                color,
            });

            match fill_mode {
                FillMode::Filled => self.staging.extend_from_slice(&verts),
                FillMode::Outline => {
                    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
                        self.staging.push(verts[i]);
                        self.staging.push(verts[j]);
                    }
                }
            }
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.fill_pipeline.is_some()
            && self.line_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tessella scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangles.wgsl").into()),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tessella scene pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        self.fill_pipeline = Some(create_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::TriangleList,
            "tessella fill pipeline",
        ));
        self.line_pipeline = Some(create_pipeline(
            ctx,
            &shader,
            &layout,
            wgpu::PrimitiveTopology::LineList,
            "tessella outline pipeline",
        ));
        self.pipeline_format = Some(ctx.surface_format);
    }

    fn ensure_vbo_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(256);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessella scene vbo"),
            size: (new_cap * std::mem::size_of::<SceneVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    ctx.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[SceneVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Opaque colors; no blending needed.
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Source winding is uncontrolled; never cull.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
}
