use crate::{
    config::model::StackConfig,
    foundation::error::{StackError, StackResult},
    scroll::source::ScrollSource,
    stack::{
        complete::{CompletionEdge, CompletionLatch},
        compute::{ItemSample, TickGeometry, compute_item},
        detect::TransformCache,
        transform::StackTransform,
    },
    surface::handle::{BaseStyle, ItemHandle, SectionHandle, StackMount, Viewport},
};

/// Result of delivering one scroll offset to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case", tag = "outcome")]
pub enum TickOutcome {
    /// A full pass ran.
    Applied {
        /// Items whose style was written.
        writes: usize,
        /// Whether the completion hook fired on this pass.
        completed: bool,
    },
    /// A pass was already in progress; the offset was discarded.
    Dropped,
    /// Nothing is mounted (torn down, no items, or no section).
    Inert,
}

/// Handles captured at a successful setup.
struct Mounted {
    items: Vec<Box<dyn ItemHandle>>,
    /// Item layout tops relative to the section top.
    offsets: Vec<f64>,
    section: Box<dyn SectionHandle>,
    viewport: Box<dyn Viewport>,
}

impl Mounted {
    fn measure_offsets(items: &[Box<dyn ItemHandle>], section: &dyn SectionHandle) -> Vec<f64> {
        let section_top = section.measure_top();
        items
            .iter()
            .map(|item| item.measure_top() - section_top)
            .collect()
    }

    fn into_mount(self) -> StackMount {
        StackMount {
            items: self.items,
            section: Some(self.section),
            viewport: self.viewport,
        }
    }
}

/// Scroll-linked stacking engine: owns the per-item cache, the completion latch and the frame loop.
///
/// ```no_run
/// use scroll_stack::{ScriptedScroll, StackConfig, StackEngine, VirtualPage};
///
/// let page = VirtualPage::new(0.0, 800.0).with_items([300.0, 300.0, 300.0]);
/// let mut engine = StackEngine::new(StackConfig::default(), ScriptedScroll::sweep(0.0, 1200.0, 16.0))?;
/// engine.setup(page.mount())?;
/// let mut t = 0.0;
/// while engine.frame(t) && engine.source().remaining() > 0 {
///     t += 16.0;
/// }
/// engine.teardown();
/// # Ok::<(), scroll_stack::StackError>(())
/// ```
pub struct StackEngine<S: ScrollSource> {
    config: StackConfig,
    source: S,
    mounted: Option<Mounted>,
    parked: Option<StackMount>,
    cache: TransformCache,
    latch: CompletionLatch,
    samples: Vec<ItemSample>,
    ticking: bool,
    running: bool,
}

impl<S: ScrollSource> StackEngine<S> {
    /// Validate `config` and build an unmounted engine.
    pub fn new(config: StackConfig, source: S) -> StackResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            mounted: None,
            parked: None,
            cache: TransformCache::default(),
            latch: CompletionLatch::default(),
            samples: Vec::new(),
            ticking: false,
            running: false,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Scroll substrate.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scroll substrate, e.g. to feed wheel input.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Whether a section with items is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether the frame loop wants more frames.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the last item is currently inside its trigger window.
    pub fn is_stack_complete(&self) -> bool {
        self.latch.is_complete()
    }

    /// Samples of the most recent pass, in index order.
    pub fn samples(&self) -> &[ItemSample] {
        &self.samples
    }

    /// Last committed transform of item `index`.
    pub fn committed(&self, index: usize) -> Option<&StackTransform> {
        self.cache.get(index)
    }

    /// Mount on `mount`, install base styles, start the source and run an initial pass.
    ///
    /// Empty item lists and a missing section leave the engine inert without error. A
    /// non-positive viewport height is rejected.
    #[tracing::instrument(skip_all, fields(items = mount.items.len()))]
    pub fn setup(&mut self, mount: StackMount) -> StackResult<()> {
        if self.mounted.is_some() || self.parked.is_some() {
            self.teardown();
        }

        if mount.items.is_empty() {
            tracing::debug!("no items; engine stays inert");
            self.parked = Some(mount);
            return Ok(());
        }
        let StackMount {
            mut items,
            section,
            viewport,
        } = mount;
        let Some(section) = section else {
            tracing::debug!("no section; engine stays inert");
            self.parked = Some(StackMount {
                items,
                section: None,
                viewport,
            });
            return Ok(());
        };

        let height = viewport.height();
        if !(height.is_finite() && height > 0.0) {
            self.parked = Some(StackMount {
                items,
                section: Some(section),
                viewport,
            });
            return Err(StackError::invalid_configuration(format!(
                "viewport height must be finite and > 0, got {height}"
            )));
        }

        let count = items.len();
        for (i, item) in items.iter_mut().enumerate() {
            item.init_base_style(&BaseStyle::for_item(i, count));
            if i + 1 < count {
                item.reserve_trailing_space(self.config.item_distance);
            }
        }
        let offsets = Mounted::measure_offsets(&items, &*section);

        self.mounted = Some(Mounted {
            items,
            offsets,
            section,
            viewport,
        });
        self.source.start();
        self.running = true;
        tracing::debug!(count, "stack mounted");

        let offset = self.source.offset();
        self.on_tick(offset);
        Ok(())
    }

    /// Re-capture item layout within the section after a layout change.
    ///
    /// Moving the section as a whole needs no remeasure; ticks follow the live section top.
    pub fn remeasure(&mut self) {
        if let Some(m) = self.mounted.as_mut() {
            m.offsets = Mounted::measure_offsets(&m.items, &*m.section);
        }
    }

    /// Frame-loop body: poll the source and recompute if it emitted an offset.
    ///
    /// Returns whether another frame should be requested.
    pub fn frame(&mut self, time_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        if let Some(offset) = self.source.raf(time_ms) {
            self.on_tick(offset);
        }
        self.running && self.source.is_active()
    }

    /// Recompute every item for `offset`, commit changed transforms, then update completion.
    pub fn on_tick(&mut self, offset: f64) -> TickOutcome {
        if self.ticking {
            tracing::trace!(offset, "tick dropped; pass in progress");
            return TickOutcome::Dropped;
        }
        let Some(m) = self.mounted.as_mut() else {
            return TickOutcome::Inert;
        };
        let _pass = PassGuard::enter(&mut self.ticking);

        let viewport_height = m.viewport.height();
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            tracing::warn!(viewport_height, "skipping pass for degenerate viewport");
            return TickOutcome::Inert;
        }
        let section_top = m.section.measure_top();
        let end_top = m
            .section
            .end_sentinel_top()
            .unwrap_or_else(|| section_top + m.section.measure_height());
        if !(offset.is_finite() && section_top.is_finite() && end_top.is_finite()) {
            tracing::warn!(offset, section_top, end_top, "skipping pass for non-finite geometry");
            return TickOutcome::Inert;
        }
        let geo = TickGeometry {
            scroll: offset,
            section_top,
            end_top,
            viewport_height,
        };

        let count = m.items.len();
        self.samples.clear();
        let mut writes = 0;
        for (index, item) in m.items.iter_mut().enumerate() {
            let card_top = section_top + m.offsets[index];
            let sample = compute_item(&self.config, &geo, index, count, card_top);
            if self
                .cache
                .commit_if_changed(index, sample.transform, &mut **item)
            {
                writes += 1;
            }
            self.samples.push(sample);
        }

        let mut completed = false;
        if let Some(last) = self.samples.last() {
            match self.latch.observe(last.window.contains(offset)) {
                CompletionEdge::Entered => {
                    tracing::debug!(offset, "stack complete");
                    if let Some(hook) = &self.config.on_stack_complete {
                        hook.call();
                    }
                    completed = true;
                }
                CompletionEdge::Left => tracing::debug!(offset, "stack completion reset"),
                CompletionEdge::Unchanged => {}
            }
        }

        TickOutcome::Applied { writes, completed }
    }

    /// Stop the frame loop, dispose the source and drop all per-mount state.
    ///
    /// Returns the handles given to [`StackEngine::setup`], if any. Safe in any state.
    pub fn teardown(&mut self) -> Option<StackMount> {
        self.running = false;
        self.source.dispose();
        self.cache.clear();
        self.samples.clear();
        self.latch.reset();
        self.ticking = false;
        let mount = self
            .mounted
            .take()
            .map(Mounted::into_mount)
            .or_else(|| self.parked.take());
        if mount.is_some() {
            tracing::debug!("stack torn down");
        }
        mount
    }

    /// Replace the configuration and remount on the same handles.
    #[tracing::instrument(skip_all)]
    pub fn reconfigure(&mut self, config: StackConfig) -> StackResult<()> {
        config.validate()?;
        let mount = self.teardown();
        self.config = config;
        match mount {
            Some(mount) => self.setup(mount),
            None => Ok(()),
        }
    }
}

/// Holds the reentrancy flag for one pass and releases it on every exit, unwinding included.
struct PassGuard<'a>(&'a mut bool);

impl<'a> PassGuard<'a> {
    fn enter(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl<S: ScrollSource> Drop for StackEngine<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/engine.rs"]
mod tests;
