use tracing::{debug, trace, warn};

use crate::api::args::{TernaryArgs, TernaryCall, TernaryDelta};
use crate::api::artists::{
    AnnotationArtist, ArrowArtist, Artist, ArtistId, FormatSpec, LineArtist, LineStyle,
    ScatterArtist, ScatterStyle, TextArtist,
};
use crate::api::axes_config::{ColorbarPlacement, LegendPlacement, TernaryAxesConfig};
use crate::api::frame_builder::{FrameContext, build_render_frame};
use crate::api::operations::{AxesOperation, AxisKind, AxisScale};
use crate::core::ticks::{default_ticks, normalize_ticks};
use crate::core::{
    ComponentValue, Point2, ResolvedCoordinates, Resolver, RightAxisGrid, TernaryConfig,
    TernaryCoordinateSystem, TernaryTransforms, Viewport,
};
use crate::error::{TernaryError, TernaryResult};
#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;
use crate::render::{RenderFrame, Renderer};

/// Everything that depends on the total, rebuilt as one unit.
#[derive(Debug, Clone, PartialEq)]
struct AxesState {
    system: TernaryCoordinateSystem,
    transforms: TernaryTransforms,
    ticks: Vec<f64>,
}

impl AxesState {
    fn build(config: &TernaryAxesConfig, ternary: TernaryConfig) -> TernaryResult<Self> {
        let system = TernaryCoordinateSystem::new(ternary);
        let transforms = TernaryTransforms::build(
            system,
            config.viewport,
            config.margins,
            config.tick_label_pad_px,
        )?;
        Ok(Self {
            system,
            transforms,
            ticks: default_ticks(ternary.total(), config.max_ticks),
        })
    }
}

/// Ternary plotting surface.
///
/// Drawing calls take `(b, l, r)` arguments, resolve them to plotting
/// coordinates `(b, l)` and store the result as artists. The projection is
/// applied when a frame is built, so artists survive total and viewport
/// changes unchanged in data space.
pub struct TernaryAxes<R: Renderer> {
    renderer: R,
    config: TernaryAxesConfig,
    state: AxesState,
    artists: Vec<Artist>,
}

impl<R: Renderer> TernaryAxes<R> {
    pub fn new(renderer: R, config: TernaryAxesConfig) -> TernaryResult<Self> {
        config.validate()?;
        let state = AxesState::build(&config, config.ternary_config()?)?;
        debug!(
            total = config.total,
            width = config.viewport.width,
            height = config.viewport.height,
            "create ternary axes"
        );
        Ok(Self {
            renderer,
            config,
            state,
            artists: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &TernaryAxesConfig {
        &self.config
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.state.system.config().total()
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.state.system.config().tolerance()
    }

    #[must_use]
    pub fn ternary_config(&self) -> TernaryConfig {
        self.state.system.config()
    }

    #[must_use]
    pub fn resolver(&self) -> Resolver {
        self.state.system.resolver()
    }

    #[must_use]
    pub fn coordinate_system(&self) -> &TernaryCoordinateSystem {
        &self.state.system
    }

    #[must_use]
    pub fn transforms(&self) -> &TernaryTransforms {
        &self.state.transforms
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Changes the invariant sum.
    ///
    /// The new transform set is built completely before it replaces the old
    /// one; on error the axes are left untouched. Ticks return to the
    /// default locator for the new total.
    pub fn set_total(&mut self, total: f64) -> TernaryResult<()> {
        let ternary = self.state.system.config().with_total(total)?;
        let state = AxesState::build(&self.config, ternary)?;
        let previous = self.total();
        self.state = state;
        self.config.total = total;
        debug!(previous, total, ticks = self.state.ticks.len(), "ternary total changed");
        Ok(())
    }

    pub fn set_tolerance(&mut self, tolerance: f64) -> TernaryResult<()> {
        let ternary = self.state.system.config().with_tolerance(tolerance)?;
        let mut state = AxesState::build(&self.config, ternary)?;
        state.ticks = std::mem::take(&mut self.state.ticks);
        self.state = state;
        self.config.tolerance = tolerance;
        debug!(tolerance, "ternary tolerance changed");
        Ok(())
    }

    /// Resizes the drawing surface; ticks and artists are kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TernaryResult<()> {
        let transforms = TernaryTransforms::build(
            self.state.system,
            viewport,
            self.config.margins,
            self.config.tick_label_pad_px,
        )?;
        self.state.transforms = transforms;
        self.config.viewport = viewport;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "ternary viewport changed"
        );
        Ok(())
    }

    /// Resolves numeric `(b, l, r)` arguments without drawing anything.
    pub fn resolve(&self, args: TernaryArgs) -> TernaryResult<ResolvedCoordinates> {
        let (b, l, r) = args.into_coordinates()?;
        self.resolver().resolve(b, l, r)
    }

    /// Adds a line. A label third argument is a format string such as `"ro-"`.
    pub fn plot(&mut self, args: TernaryArgs) -> TernaryResult<ArtistId> {
        let (coordinates, style) = match args.into_call()? {
            TernaryCall::Resolve { b, l, r } => {
                (self.resolver().resolve(b, l, r)?, LineStyle::default())
            }
            TernaryCall::Passthrough { b, l, label } => (
                self.passthrough(b, l)?,
                LineStyle::parse_format(&label)?,
            ),
        };
        self.plot_resolved(coordinates, style)
    }

    /// Adds a line with an explicit style; the arguments must be numeric.
    pub fn plot_with_style(
        &mut self,
        args: TernaryArgs,
        style: LineStyle,
    ) -> TernaryResult<ArtistId> {
        let coordinates = self.resolve(args)?;
        self.plot_resolved(coordinates, style)
    }

    fn plot_resolved(
        &mut self,
        coordinates: ResolvedCoordinates,
        style: LineStyle,
    ) -> TernaryResult<ArtistId> {
        let style = style.validate()?;
        let points = coordinates.points();
        trace!(points = points.len(), "add line artist");
        Ok(self.push(Artist::Line(LineArtist { points, style })))
    }

    /// Adds markers. A label third argument is a format string; the color
    /// and marker it names override `style`, anything it omits is kept.
    pub fn scatter(&mut self, args: TernaryArgs, style: ScatterStyle) -> TernaryResult<ArtistId> {
        let (coordinates, style) = match args.into_call()? {
            TernaryCall::Resolve { b, l, r } => (self.resolver().resolve(b, l, r)?, style),
            TernaryCall::Passthrough { b, l, label } => {
                let format = FormatSpec::parse(&label)?;
                let style = ScatterStyle {
                    color: format.color.unwrap_or(style.color),
                    marker: format.marker.unwrap_or(style.marker),
                    ..style
                };
                (self.passthrough(b, l)?, style)
            }
        };
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(TernaryError::InvalidData(
                "scatter marker size must be finite and > 0".to_owned(),
            ));
        }
        style.color.validate()?;

        let points = coordinates.points();
        trace!(points = points.len(), "add scatter artist");
        Ok(self.push(Artist::Scatter(ScatterArtist { points, style })))
    }

    /// Adds a text label.
    ///
    /// With numeric arguments the label is `text`; with `(b, l, label)` the
    /// label argument is the text and `text` must be `None`.
    pub fn text(&mut self, args: TernaryArgs, text: Option<&str>) -> TernaryResult<ArtistId> {
        let (position, text) = match (args.into_call()?, text) {
            (TernaryCall::Resolve { b, l, r }, Some(text)) => {
                (self.resolver().resolve(b, l, r)?.point()?, text.to_owned())
            }
            (TernaryCall::Resolve { .. }, None) => {
                return Err(TernaryError::InvalidData(
                    "text requires a label string".to_owned(),
                ));
            }
            (TernaryCall::Passthrough { b, l, label }, None) => {
                (self.passthrough(b, l)?.point()?, label)
            }
            (TernaryCall::Passthrough { .. }, Some(_)) => {
                return Err(TernaryError::InvalidData(
                    "text given both as third argument and as label".to_owned(),
                ));
            }
        };
        if text.is_empty() {
            return Err(TernaryError::InvalidData("text must not be empty".to_owned()));
        }
        Ok(self.push(Artist::Text(TextArtist { position, text })))
    }

    /// Adds an annotation at `xy`, with the text optionally placed at `xytext`.
    pub fn annotate(
        &mut self,
        text: impl Into<String>,
        xy: TernaryArgs,
        xytext: Option<TernaryArgs>,
    ) -> TernaryResult<ArtistId> {
        let text = text.into();
        if text.is_empty() {
            return Err(TernaryError::InvalidData(
                "annotation text must not be empty".to_owned(),
            ));
        }
        let xy = self.resolve(xy)?.point()?;
        let xytext = xytext
            .map(|args| self.resolve(args).and_then(|resolved| resolved.point()))
            .transpose()?;
        Ok(self.push(Artist::Annotation(AnnotationArtist { text, xy, xytext })))
    }

    /// Adds an arrow from `start` by `delta`.
    ///
    /// The end point adds each delta to its component only when both are
    /// given; start and end are resolved independently and the arrow keeps
    /// their difference in plotting coordinates.
    pub fn arrow(&mut self, start: TernaryArgs, delta: TernaryDelta) -> TernaryResult<ArtistId> {
        let (b, l, r) = start.into_coordinates()?;
        let b = scalar_component(b, "b")?;
        let l = scalar_component(l, "l")?;
        let r = scalar_component(r, "r")?;

        let resolver = self.resolver();
        let start = resolver.resolve_point(b, l, r)?;
        let end = resolver.resolve_point(
            shifted(b, delta.db),
            shifted(l, delta.dl),
            shifted(r, delta.dr),
        )?;
        let delta = Point2::new(end.x - start.x, end.y - start.y);
        trace!(dx = delta.x, dy = delta.y, "add arrow artist");
        Ok(self.push(Artist::Arrow(ArrowArtist { start, delta })))
    }

    fn passthrough(
        &self,
        b: ComponentValue,
        l: ComponentValue,
    ) -> TernaryResult<ResolvedCoordinates> {
        self.resolver().resolve(Some(b), Some(l), None)
    }

    fn push(&mut self, artist: Artist) -> ArtistId {
        self.artists.push(artist);
        ArtistId(self.artists.len() - 1)
    }

    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    #[must_use]
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(id.0)
    }

    /// Removes every artist; ticks, labels and the title are kept.
    pub fn clear(&mut self) {
        debug!(artists = self.artists.len(), "clear ternary artists");
        self.artists.clear();
    }

    /// Sets the tick list shared by the bottom, left, and right axes.
    pub fn set_ticks(&mut self, ticks: &[f64]) -> TernaryResult<()> {
        let ticks = normalize_ticks(ticks, self.total())?;
        debug!(count = ticks.len(), "ternary ticks changed");
        self.state.ticks = ticks;
        Ok(())
    }

    /// Setting ticks on any axis sets them on all three.
    pub fn set_axis_ticks(&mut self, axis: AxisKind, ticks: &[f64]) -> TernaryResult<()> {
        trace!(%axis, "set axis ticks");
        self.set_ticks(ticks)
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.state.ticks
    }

    /// Gridlines and labels of the right axis for the current ticks.
    pub fn right_axis_grid(&self) -> TernaryResult<RightAxisGrid> {
        RightAxisGrid::derive(self.resolver(), &self.state.ticks)
    }

    /// Shows, hides, or with `None` toggles all gridlines. Returns the new state.
    pub fn grid(&mut self, visible: Option<bool>) -> bool {
        self.config.grid_visible = visible.unwrap_or(!self.config.grid_visible);
        debug!(visible = self.config.grid_visible, "ternary grid toggled");
        self.config.grid_visible
    }

    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.config.grid_visible
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = Some(title.into());
    }

    pub fn set_blabel(&mut self, label: impl Into<String>) {
        self.config.blabel = Some(label.into());
    }

    pub fn set_llabel(&mut self, label: impl Into<String>) {
        self.config.llabel = Some(label.into());
    }

    pub fn set_rlabel(&mut self, label: impl Into<String>) {
        self.config.rlabel = Some(label.into());
    }

    #[must_use]
    pub fn axis_label(&self, axis: AxisKind) -> Option<&str> {
        match axis {
            AxisKind::Bottom => self.config.blabel.as_deref(),
            AxisKind::Left => self.config.llabel.as_deref(),
            AxisKind::Right => self.config.rlabel.as_deref(),
        }
    }

    pub fn set_label_position(&mut self, axis: AxisKind, position: &str) -> TernaryResult<()> {
        trace!(%axis, position, "set label position");
        Err(reject("set_label_position", "axis label positions are fixed by the triangle"))
    }

    pub fn set_scale(&mut self, axis: AxisKind, scale: AxisScale) -> TernaryResult<()> {
        match scale {
            AxisScale::Linear => Ok(()),
            _ => {
                trace!(%axis, ?scale, "set scale");
                Err(reject("set_scale", "only linear scales keep the simplex intact"))
            }
        }
    }

    pub fn set_limits(&mut self, axis: AxisKind, min: f64, max: f64) -> TernaryResult<()> {
        trace!(%axis, min, max, "set limits");
        Err(reject("set_limits", "data limits are fixed to [0, total]"))
    }

    /// Data limits of the bottom and left axes, always `[0, total]`.
    #[must_use]
    pub fn data_limits(&self) -> ((f64, f64), (f64, f64)) {
        let total = self.total();
        ((0.0, total), (0.0, total))
    }

    /// Equal aspect; the triangle is never stretched.
    #[must_use]
    pub fn data_ratio(&self) -> f64 {
        1.0
    }

    #[must_use]
    pub fn can_zoom(&self) -> bool {
        false
    }

    #[must_use]
    pub fn can_pan(&self) -> bool {
        false
    }

    pub fn start_pan(&mut self, _x: f64, _y: f64) -> TernaryResult<()> {
        Err(reject("start_pan", "ternary axes cannot be panned"))
    }

    pub fn drag_pan(&mut self, _x: f64, _y: f64) -> TernaryResult<()> {
        Err(reject("drag_pan", "ternary axes cannot be panned"))
    }

    pub fn end_pan(&mut self) -> TernaryResult<()> {
        Err(reject("end_pan", "ternary axes cannot be panned"))
    }

    pub fn zoom(&mut self, _factor: f64) -> TernaryResult<()> {
        Err(reject("zoom", "ternary axes cannot be zoomed"))
    }

    /// Checks that a host-dispatched operation may run on these axes.
    pub fn ensure_supported(&self, operation: AxesOperation) -> TernaryResult<()> {
        match operation.disabled_reason() {
            Some(reason) => Err(reject(operation.name(), reason)),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn legend_placement(&self) -> LegendPlacement {
        self.config.legend
    }

    #[must_use]
    pub fn colorbar_placement(&self) -> ColorbarPlacement {
        self.config.colorbar
    }

    /// Maps a device pixel back to `(b, l, r)`.
    #[must_use]
    pub fn display_to_ternary(&self, pixel: Point2) -> (f64, f64, f64) {
        let data = self.state.transforms.display_to_data_point(pixel);
        (data.x, data.y, self.total() - data.x - data.y)
    }

    pub fn build_frame(&self) -> TernaryResult<RenderFrame> {
        let right_axis = self.right_axis_grid()?;
        build_render_frame(&FrameContext {
            config: &self.config,
            system: &self.state.system,
            transforms: &self.state.transforms,
            ticks: &self.state.ticks,
            right_axis: &right_axis,
            artists: &self.artists,
        })
    }

    pub fn render(&mut self) -> TernaryResult<()> {
        let frame = self.build_frame()?;
        debug!(
            lines = frame.lines.len(),
            markers = frame.markers.len(),
            texts = frame.texts.len(),
            "render ternary frame"
        );
        self.renderer.render(&frame)
    }

    /// Draws the frame into a host-owned cairo context, such as a GTK draw
    /// callback, instead of the renderer's own surface.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TernaryResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}

fn reject(operation: &'static str, reason: &'static str) -> TernaryError {
    warn!(operation, reason, "rejected unsupported ternary operation");
    TernaryError::UnsupportedOperation { operation, reason }
}

fn scalar_component(value: Option<ComponentValue>, name: &str) -> TernaryResult<Option<f64>> {
    value.map(|value| value.expect_scalar(name)).transpose()
}

fn shifted(value: Option<f64>, delta: Option<f64>) -> Option<f64> {
    Some(value? + delta?)
}
