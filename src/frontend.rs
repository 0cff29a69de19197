use crate::{
    clipboard::{CopyFailure, CopyFeedback, COPY_FEEDBACK_MS},
    config::{BindingError, SiteConfig, MOUNT_ELEMENT_ID, SITE_CONFIG_ELEMENT_ID},
    logging::{log_event, set_max_level, LogLevel},
    modal::{ModalAction, ModalKind, ModalState, PageModals},
    particles::{ParticleField, LINK_LINE_WIDTH},
    pointer::{magnetic_offset, magnetic_transform, shine_background, tilt, tilt_transform, Rect, Tilt},
    projects::{lookup_attr, ProjectInfo, PROJECTS},
    reveal::{IntersectionSample, RevealTracker, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_CLASS},
    ripple::{Ripple, RippleSet, RIPPLE_DURATION_MS},
    scheduler::{FrameBus, Scheduler, SubscriptionId, TimerId},
    scroll::{parallax_transform, progress_percent, progress_width},
    styles::PAGE_STYLES,
    typing::TypingEffect,
};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::{Array, Function, Promise, Reflect};
use serde_json::json;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    f64::consts::TAU,
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const SHAPE_COUNT: usize = 3;
const PARTICLE_CANVAS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 1; opacity: 0.3;";


struct ContactEntry {
    icon: &'static str,
    label: &'static str,
    copy: &'static str,
}

static CONTACTS: [ContactEntry; 3] = [
    ContactEntry {
        icon: "✉️",
        label: "Email",
        copy: "elone.levy@gmail.com",
    },
    ContactEntry {
        icon: "📱",
        label: "Téléphone",
        copy: "+33 6 12 34 56 78",
    },
    ContactEntry {
        icon: "💼",
        label: "LinkedIn",
        copy: "linkedin.com/in/elone-levy",
    },
];

static SKILLS: [&str; 8] = [
    "HTML5",
    "CSS3",
    "JavaScript",
    "React",
    "Node.js",
    "Flutter",
    "Git",
    "Figma",
];

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

fn element_rect(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn pointer_position(event: &MouseEvent) -> (f64, f64) {
    (f64::from(event.client_x()), f64::from(event.client_y()))
}

type Task = Box<dyn FnOnce()>;
type FrameSubscriber = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct DriverState {
    scheduler: Scheduler<Task>,
    frames: FrameBus<FrameSubscriber>,
}

#[derive(Clone)]
struct FrameDriver {
    state: Rc<RefCell<DriverState>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl PartialEq for FrameDriver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl FrameDriver {
    fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(DriverState::default())),
            frame: Rc::new(RefCell::new(None)),
        }
    }

    fn cancel(&self, id: TimerId) {
        self.state.borrow_mut().scheduler.cancel(id);
    }

    fn after(&self, delay_ms: f64, task: impl FnOnce() + 'static) -> TimerId {
        let mut state = self.state.borrow_mut();
        // The clock only moves on frames; count the time elapsed since the last one.
        let lag_ms = (performance_now() - state.scheduler.now()).max(0.0);
        state.scheduler.schedule(lag_ms + delay_ms, Box::new(task))
    }

    fn on_frame(&self, subscriber: impl FnMut(f64) + 'static) -> SubscriptionId {
        self.state.borrow_mut().frames.subscribe(Box::new(subscriber))
    }

    fn off_frame(&self, id: SubscriptionId) {
        self.state.borrow_mut().frames.unsubscribe(id);
    }

    fn start(&self) {
        if self.frame.borrow().is_none() {
            self.request_next();
        }
    }

    fn request_next(&self) {
        let driver = self.clone();
        let handle = request_animation_frame(move |timestamp| {
            driver.pump(timestamp);
            driver.request_next();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn pump(&self, timestamp: f64) {
        let due = self.state.borrow_mut().scheduler.advance_to(timestamp);
        for task in due {
            task();
        }

        let mut batch = self.state.borrow_mut().frames.begin_frame();
        for (_, subscriber) in batch.iter_mut() {
            subscriber(timestamp);
        }
        self.state.borrow_mut().frames.end_frame(batch);
    }
}

#[derive(Default)]
struct RevealShared {
    tracker: RefCell<RevealTracker<u32>>,
    targets: RefCell<HashMap<u32, (Element, Callback<()>)>>,
    next_key: Cell<u32>,
}

/// One intersection observer shared by every revealable element.
#[derive(Clone)]
struct RevealObserver {
    shared: Rc<RevealShared>,
    observer: Option<IntersectionObserver>,
    _callback: Rc<Option<Closure<dyn FnMut(Array, IntersectionObserver)>>>,
}

impl PartialEq for RevealObserver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl RevealObserver {
    fn new() -> Self {
        let shared = Rc::new(RevealShared::default());

        let callback = {
            let shared = shared.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    handle_intersections(&shared, &observer, &entries);
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok();

        if observer.is_none() {
            log_event(
                LogLevel::Warn,
                "reveal_observer_unavailable",
                json!({ "fallback": "reveal_immediately" }),
            );
        }

        Self {
            shared,
            observer,
            _callback: Rc::new(Some(callback)),
        }
    }

    fn observe(&self, element: Element, on_reveal: Callback<()>) -> Option<u32> {
        let Some(observer) = self.observer.as_ref() else {
            on_reveal.emit(());
            return None;
        };

        let key = self.shared.next_key.get();
        self.shared.next_key.set(key.wrapping_add(1));
        let _ = element.set_attribute(REVEAL_KEY_ATTR, &key.to_string());

        self.shared.tracker.borrow_mut().observe(key);
        observer.observe(&element);
        self.shared
            .targets
            .borrow_mut()
            .insert(key, (element, on_reveal));
        Some(key)
    }

    fn forget(&self, key: u32) {
        if let Some((element, _)) = self.shared.targets.borrow_mut().remove(&key) {
            if let Some(observer) = self.observer.as_ref() {
                observer.unobserve(&element);
            }
        }
        self.shared.tracker.borrow_mut().forget(key);
    }
}

fn handle_intersections(shared: &RevealShared, observer: &IntersectionObserver, entries: &Array) {
    let samples: Vec<IntersectionSample<u32>> = entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let key = entry
                .target()
                .get_attribute(REVEAL_KEY_ATTR)?
                .parse::<u32>()
                .ok()?;
            Some(IntersectionSample {
                key,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect();

    let revealed = shared.tracker.borrow_mut().handle(&samples);
    for key in revealed {
        let target = shared.targets.borrow_mut().remove(&key);
        if let Some((element, on_reveal)) = target {
            observer.unobserve(&element);
            on_reveal.emit(());
        }
    }
}

#[hook]
fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let observer = use_context::<RevealObserver>();

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let registration = match (observer, node.cast::<Element>()) {
                (Some(observer), Some(element)) => {
                    let on_reveal = Callback::from(move |()| revealed.set(true));
                    observer
                        .observe(element, on_reveal)
                        .map(|key| (observer, key))
                }
                _ => {
                    revealed.set(true);
                    None
                }
            };

            move || {
                if let Some((observer, key)) = registration {
                    observer.forget(key);
                }
            }
        });
    }

    *revealed
}

#[hook]
fn use_ripples(host: NodeRef) -> (Vec<Ripple>, Callback<MouseEvent>) {
    let ripples = use_mut_ref(RippleSet::default);
    let redraw = use_force_update();
    let driver = use_context::<FrameDriver>();

    let spawn = {
        let ripples = ripples.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: MouseEvent| {
            let (Some(driver), Some(rect)) = (driver.as_ref(), element_rect(&host)) else {
                return;
            };

            let (x, y) = pointer_position(&event);
            let id = ripples.borrow_mut().spawn(rect, x, y);
            redraw.force_update();

            let ripples = ripples.clone();
            let redraw = redraw.clone();
            driver.after(RIPPLE_DURATION_MS, move || {
                if ripples.borrow_mut().remove(id) {
                    redraw.force_update();
                }
            });
        })
    };

    let live = ripples.borrow().live().to_vec();
    (live, spawn)
}

fn render_ripples(ripples: &[Ripple]) -> Html {
    ripples
        .iter()
        .map(|ripple| {
            html! {
                <span key={ripple.id} class="ripple" style={ripple.style()}></span>
            }
        })
        .collect::<Html>()
}

#[derive(Clone, Copy, Default, PartialEq)]
struct ScrollMetrics {
    top: f64,
    height: f64,
    client_height: f64,
}

impl ScrollMetrics {
    fn read() -> Self {
        let Some(document) = window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let Some(root) = document.document_element() else {
            return Self::default();
        };

        let body_top = document
            .body()
            .map(|body| f64::from(body.scroll_top()))
            .unwrap_or(0.0);
        let top = if body_top > 0.0 {
            body_top
        } else {
            f64::from(root.scroll_top())
        };

        Self {
            top,
            height: f64::from(root.scroll_height()),
            client_height: f64::from(root.client_height()),
        }
    }

    fn percent(&self) -> f64 {
        progress_percent(self.top, self.height, self.client_height)
    }
}

#[hook]
fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state(ScrollMetrics::read);

    {
        let metrics = metrics.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| metrics.set(ScrollMetrics::read()))
            });
            move || drop(listener)
        });
    }

    *metrics
}

#[function_component(ScrollProgress)]
fn scroll_progress() -> Html {
    let metrics = use_scroll_metrics();

    html! {
        <div id="scroll-progress" class="scroll-progress" style={progress_width(metrics.percent())}></div>
    }
}

#[function_component(ParallaxShapes)]
fn parallax_shapes() -> Html {
    let metrics = use_scroll_metrics();

    html! {
        <div class="shapes" aria-hidden="true">
            { for (0..SHAPE_COUNT).map(|index| html! {
                <div
                    class={classes!("shape", format!("shape-{}", index + 1))}
                    style={parallax_transform(metrics.top, index)}
                ></div>
            }) }
        </div>
    }
}

struct ParticleSession {
    driver: FrameDriver,
    subscription: SubscriptionId,
    _resize: EventListener,
}

impl Drop for ParticleSession {
    fn drop(&mut self) {
        self.driver.off_frame(self.subscription);
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

fn draw_field(context: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    context.clear_rect(0.0, 0.0, width, height);

    for particle in field.particles() {
        context.set_fill_style_str(particle.color.as_css());
        context.begin_path();
        let _ = context.arc(particle.x, particle.y, particle.radius, 0.0, TAU);
        context.fill();
    }

    let particles = field.particles();
    context.set_line_width(LINK_LINE_WIDTH);
    for link in field.links() {
        let (a, b) = (&particles[link.from], &particles[link.to]);
        context.set_stroke_style_str(&link.stroke_style());
        context.begin_path();
        context.move_to(a.x, a.y);
        context.line_to(b.x, b.y);
        context.stroke();
    }
}

fn start_particle_field(
    driver: FrameDriver,
    canvas: HtmlCanvasElement,
    count: usize,
    link_distance: f64,
) -> Option<ParticleSession> {
    let win = window()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let mut rng = fastrand::Rng::with_seed(random_seed());
    let field = Rc::new(RefCell::new(
        ParticleField::new(width, height, count, &mut rng).with_link_distance(link_distance),
    ));

    let resize = {
        let field = field.clone();
        EventListener::new(&win, "resize", move |_| {
            let (width, height) = viewport_size();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        })
    };

    let subscription = driver.on_frame(move |_| {
        let mut field = field.borrow_mut();
        field.step();
        draw_field(&context, &field);
    });

    log_event(
        LogLevel::Debug,
        "particle_field_started",
        json!({ "count": count, "width": width, "height": height, "link_distance": link_distance }),
    );

    Some(ParticleSession {
        driver,
        subscription,
        _resize: resize,
    })
}

#[derive(Properties, PartialEq)]
struct ParticleCanvasProps {
    count: usize,
    link_distance: f64,
}

#[function_component(ParticleCanvas)]
fn particle_canvas(props: &ParticleCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let driver = use_context::<FrameDriver>();

    use_effect_with(
        (canvas_ref.clone(), props.count, props.link_distance),
        move |(canvas_ref, count, link_distance)| {
            let session = match (driver, canvas_ref.cast::<HtmlCanvasElement>()) {
                (Some(driver), Some(canvas)) => {
                    start_particle_field(driver, canvas, *count, *link_distance)
                }
                _ => None,
            };
            move || drop(session)
        },
    );

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" style={PARTICLE_CANVAS_STYLE} aria-hidden="true"></canvas>
    }
}

#[derive(Properties, PartialEq)]
struct MagneticButtonProps {
    label: AttrValue,
    #[prop_or(AttrValue::Static("#"))]
    href: AttrValue,
    #[prop_or_default]
    opens_modal: bool,
    #[prop_or_default]
    closes_modal: bool,
    #[prop_or_default]
    variant: Option<&'static str>,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
}

#[function_component(MagneticButton)]
fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| None::<(f64, f64)>);
    let (ripples, spawn_ripple) = use_ripples(node.clone());

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(rect) = element_rect(&node) {
                let (x, y) = pointer_position(&event);
                offset.set(Some(magnetic_offset(rect, x, y)));
            }
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_| offset.set(None))
    };

    let onclick = {
        let toggles_modal = props.opens_modal || props.closes_modal;
        let onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            if toggles_modal {
                event.prevent_default();
            }
            spawn_ripple.emit(event.clone());
            onclick.emit(event);
        })
    };

    html! {
        <a
            ref={node}
            class={classes!("btn-custom", props.variant)}
            href={props.href.clone()}
            data-trigger={props.opens_modal.then_some("modal")}
            data-close={props.closes_modal.then_some("modal")}
            style={format!("transform: {};", magnetic_transform(*offset))}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            onclick={onclick}
        >
            {props.label.clone()}
            {render_ripples(&ripples)}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct TiltCardProps {
    #[prop_or_default]
    project: Option<&'static ProjectInfo>,
    #[prop_or_default]
    on_open_project: Callback<String>,
    #[prop_or_default]
    children: Html,
}

#[function_component(TiltCard)]
fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let hover = use_state(|| None::<Tilt>);
    let visible = use_reveal(node.clone());
    let (ripples, spawn_ripple) = use_ripples(node.clone());

    let onmousemove = {
        let node = node.clone();
        let hover = hover.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(rect) = element_rect(&node) {
                let (x, y) = pointer_position(&event);
                hover.set(Some(tilt(rect, x, y)));
            }
        })
    };

    let onmouseleave = {
        let hover = hover.clone();
        Callback::from(move |_| hover.set(None))
    };

    let onclick = {
        let node = node.clone();
        let on_open_project = props.on_open_project.clone();
        Callback::from(move |event: MouseEvent| {
            spawn_ripple.emit(event);
            let project_id = node
                .cast::<Element>()
                .and_then(|element| element.get_attribute("data-project"));
            if let Some(project_id) = project_id {
                on_open_project.emit(project_id);
            }
        })
    };

    // Hidden cards keep the reveal offset from the stylesheet.
    let style = visible.then(|| format!("transform: {};", tilt_transform((*hover).as_ref())));

    html! {
        <div
            ref={node}
            class={classes!("card", "reveal", visible.then_some(VISIBLE_CLASS))}
            data-project={props.project.map(ProjectInfo::id_attr)}
            style={style}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            onclick={onclick}
        >
            {props.children.clone()}
            <div class="card-shine" style={format!("background: {};", shine_background((*hover).as_ref()))}></div>
            {render_ripples(&ripples)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBadgeProps {
    label: AttrValue,
}

#[function_component(SkillBadge)]
fn skill_badge(props: &SkillBadgeProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let (ripples, spawn_ripple) = use_ripples(node.clone());

    html! {
        <span
            ref={node}
            class={classes!("skill-badge", "reveal", visible.then_some(VISIBLE_CLASS))}
            onclick={spawn_ripple}
        >
            {props.label.clone()}
            {render_ripples(&ripples)}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <h2 ref={node} class={classes!("section-title", "reveal", visible.then_some(VISIBLE_CLASS))}>
            {props.title.clone()}
        </h2>
    }
}

fn schedule_typing(
    driver: FrameDriver,
    effect: Rc<RefCell<TypingEffect>>,
    redraw: UseForceUpdateHandle,
    pending: Rc<Cell<Option<TimerId>>>,
) {
    let Some(delay) = effect.borrow().next_delay() else {
        pending.set(None);
        return;
    };

    let next_driver = driver.clone();
    let next_pending = pending.clone();
    let id = driver.after(delay, move || {
        if effect.borrow_mut().advance().is_some() {
            redraw.force_update();
        }
        schedule_typing(next_driver, effect, redraw, next_pending);
    });
    pending.set(Some(id));
}

#[derive(Properties, PartialEq)]
struct TypingTitleProps {
    text: AttrValue,
}

#[function_component(TypingTitle)]
fn typing_title(props: &TypingTitleProps) -> Html {
    let effect = {
        let text = props.text.clone();
        use_mut_ref(move || TypingEffect::new(&text))
    };
    let redraw = use_force_update();
    let driver = use_context::<FrameDriver>();

    {
        let effect = effect.clone();
        use_effect_with((), move |_| {
            let pending = Rc::new(Cell::new(None));
            if let Some(driver) = driver.clone() {
                schedule_typing(driver, effect, redraw, pending.clone());
            }
            move || {
                if let (Some(driver), Some(id)) = (driver, pending.take()) {
                    driver.cancel(id);
                }
            }
        });
    }

    let rendered = effect.borrow().rendered();
    html! {
        <h1 id="typing-title" class="hero-title">{rendered}</h1>
    }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    id: AttrValue,
    kind: ModalKind,
    state: ModalState,
    on_action: Callback<ModalAction>,
    #[prop_or_default]
    children: Html,
}

#[function_component(Modal)]
fn modal(props: &ModalProps) -> Html {
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let kind = props.kind;
        let on_action = props.on_action.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event.target().map(JsValue::from);
            let container = node.get().map(JsValue::from);
            if target.is_some() && target == container {
                on_action.emit(ModalAction::Backdrop(kind));
            }
        })
    };

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("modal", props.state.class())}
            aria-hidden={(!props.state.is_open()).to_string()}
            onclick={onclick}
        >
            <div class="modal-content" role="dialog" aria-modal="true">
                {props.children.clone()}
            </div>
        </div>
    }
}

fn project_body(info: &ProjectInfo) -> Html {
    html! {
        <>
            <div class="project-details">
                { for info.details().into_iter().map(|(label, text)| html! {
                    <>
                        <p class="project-label"><strong>{label}</strong></p>
                        <p>{text}</p>
                    </>
                }) }
            </div>
            <div class="project-preview">
                <span class="project-preview-icon">{info.preview_icon}</span>
                {info.preview_caption}
            </div>
        </>
    }
}

#[derive(Default, PartialEq)]
struct ModalsView(PageModals);

impl Reducible for ModalsView {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let ModalAction::OpenProject(raw_id) = &action {
            if lookup_attr(raw_id).is_none() {
                log_event(
                    LogLevel::Info,
                    "project_modal_unknown_id",
                    json!({ "id": raw_id }),
                );
            }
        }

        let next = self.0.apply(&action);
        if next == self.0 {
            return self;
        }
        Rc::new(Self(next))
    }
}

fn apply_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    if value.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", value);
    }
}

async fn write_clipboard(text: &str) -> Result<(), CopyFailure> {
    let navigator: JsValue = window().ok_or(CopyFailure::Unavailable)?.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(CopyFailure::Unavailable)?;
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(CopyFailure::Unavailable)?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()
        .and_then(|value| value.dyn_into::<Promise>().ok())
        .ok_or(CopyFailure::Rejected)?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| CopyFailure::Rejected)
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let feedback = use_mut_ref(CopyFeedback::default);
    let redraw = use_force_update();
    let driver = use_context::<FrameDriver>();

    let on_copy = {
        let feedback = feedback.clone();
        Callback::from(move |index: usize| {
            let Some(entry) = CONTACTS.get(index) else {
                return;
            };

            let feedback = feedback.clone();
            let redraw = redraw.clone();
            let driver = driver.clone();
            spawn_local(async move {
                let result = write_clipboard(entry.copy).await;
                match result {
                    Ok(()) => log_event(
                        LogLevel::Debug,
                        "clipboard_copy_succeeded",
                        json!({ "item": entry.label }),
                    ),
                    Err(failure) => log_event(
                        LogLevel::Warn,
                        "clipboard_copy_failed",
                        json!({ "item": entry.label, "error_class": failure.as_str() }),
                    ),
                }

                let Some(ticket) = feedback.borrow_mut().record(index, result) else {
                    return;
                };
                redraw.force_update();

                if let Some(driver) = driver {
                    driver.after(COPY_FEEDBACK_MS, move || {
                        feedback.borrow_mut().expire(ticket);
                        redraw.force_update();
                    });
                }
            });
        })
    };

    let feedback = feedback.borrow();
    html! {
        <section id="contact" class="section">
            <SectionHeading title="Contact" />
            <div class="contact-grid">
                { for CONTACTS.iter().enumerate().map(|(index, entry)| html! {
                    <div
                        class={classes!("contact-item", feedback.item_class(index))}
                        data-copy={entry.copy}
                        role="button"
                        tabindex="0"
                        onclick={on_copy.reform(move |_: MouseEvent| index)}
                    >
                        <span class="contact-icon" aria-hidden="true">{entry.icon}</span>
                        <span class="contact-label">{entry.label}</span>
                        <span class="contact-value">{entry.copy}</span>
                    </div>
                }) }
            </div>
            <div id="copy-notification" class="copy-notification" style={feedback.notification_style()} role="status" aria-live="polite">
                {"Copié dans le presse-papiers !"}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let driver = use_state(FrameDriver::new);
    let reveal = use_state(RevealObserver::new);
    let modals = use_reducer(ModalsView::default);

    {
        let driver = (*driver).clone();
        use_effect_with((), move |_| {
            driver.start();
            log_event(LogLevel::Info, "app_loaded", json!({}));
            || ()
        });
    }

    {
        let overflow = modals.0.body_overflow();
        use_effect_with(overflow, |overflow| {
            apply_body_overflow(overflow);
            || ()
        });
    }

    let on_action = {
        let modals = modals.clone();
        Callback::from(move |action: ModalAction| modals.dispatch(action))
    };
    let open_demo = on_action.reform(|_: MouseEvent| ModalAction::OpenDemo);
    let close_demo = on_action.reform(|_: MouseEvent| ModalAction::CloseDemo);
    let close_project = on_action.reform(|_: MouseEvent| ModalAction::CloseProject);
    let open_project = on_action.reform(ModalAction::OpenProject);

    let state = modals.0;
    let config = &props.config;

    html! {
        <ContextProvider<FrameDriver> context={(*driver).clone()}>
            <ContextProvider<RevealObserver> context={(*reveal).clone()}>
                <ParticleCanvas count={config.particle_count} link_distance={config.link_distance} />
                <style>{PAGE_STYLES}</style>
                <ScrollProgress />

                <header id="home" class="hero">
                    <ParallaxShapes />
                    <HeroContent typing_text={AttrValue::from(config.typing_text.clone())} on_open_demo={open_demo} />
                </header>

                <main id="content">
                    <section id="projects" class="section">
                        <SectionHeading title="Projets" />
                        <div class="projects-grid">
                            { for PROJECTS.iter().map(|project| html! {
                                <TiltCard key={project.id} project={Some(project)} on_open_project={open_project.clone()}>
                                    <h3 class="card-title">{project.title}</h3>
                                    <p class="card-tech">{project.technologies}</p>
                                    <span class="card-cta">{"Voir le détail →"}</span>
                                </TiltCard>
                            }) }
                        </div>
                    </section>

                    <section id="skills" class="section">
                        <SectionHeading title="Compétences" />
                        <div class="skills-grid">
                            { for SKILLS.iter().map(|skill| html! {
                                <SkillBadge key={*skill} label={*skill} />
                            }) }
                        </div>
                    </section>

                    <ContactSection />
                </main>

                <Modal id="demo-modal" kind={ModalKind::Demo} state={state.demo} on_action={on_action.clone()}>
                    <button class="modal-close" type="button" data-close="modal" aria-label="Fermer" onclick={close_demo.clone()}>{"×"}</button>
                    <h3>{"Démo interactive"}</h3>
                    <p>{"Chaque carte, bouton et badge de cette page réagit au survol et au clic."}</p>
                    <MagneticButton label="Fermer" closes_modal={true} onclick={close_demo} />
                </Modal>

                <Modal id="project-modal" kind={ModalKind::Project} state={state.project} on_action={on_action}>
                    <button id="close-project-modal" class="modal-close" type="button" aria-label="Fermer" onclick={close_project}>{"×"}</button>
                    <h3 id="modal-title">{state.project_info.map(|info| info.title).unwrap_or_default()}</h3>
                    <div id="modal-body">{state.project_info.map(project_body).unwrap_or_default()}</div>
                </Modal>
            </ContextProvider<RevealObserver>>
        </ContextProvider<FrameDriver>>
    }
}

#[derive(Properties, PartialEq)]
struct HeroContentProps {
    typing_text: AttrValue,
    on_open_demo: Callback<MouseEvent>,
}

#[function_component(HeroContent)]
fn hero_content(props: &HeroContentProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("hero-content", "reveal", visible.then_some(VISIBLE_CLASS))}>
            <TypingTitle text={props.typing_text.clone()} />
            <p class="hero-subtitle">{"Développeur web & mobile"}</p>
            <div class="hero-actions">
                <MagneticButton label="Voir mes projets" href="#projects" variant="btn-primary" />
                <MagneticButton label="Démo" opens_modal={true} variant="btn-outline" onclick={props.on_open_demo.clone()} />
            </div>
        </div>
    }
}

struct Bindings {
    mount: Element,
    site_config: Option<String>,
    missing: Vec<&'static str>,
}

impl Bindings {
    fn resolve(document: &Document) -> Result<Self, BindingError> {
        let mount = document
            .get_element_by_id(MOUNT_ELEMENT_ID)
            .ok_or(BindingError::MissingMount)?;

        let mut missing = Vec::new();
        let site_config = document
            .get_element_by_id(SITE_CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        if site_config.is_none() {
            missing.push("#site-config");
        }
        if document.body().is_none() {
            missing.push("body");
        }

        Ok(Self {
            mount,
            site_config,
            missing,
        })
    }
}

pub fn run() {
    let bindings = window()
        .and_then(|w| w.document())
        .ok_or(BindingError::NoDocument)
        .and_then(|document| Bindings::resolve(&document));

    let bindings = match bindings {
        Ok(bindings) => bindings,
        Err(error) => {
            log_event(
                LogLevel::Error,
                "page_bindings_failed",
                json!({ "error_class": error.as_str(), "mount": MOUNT_ELEMENT_ID }),
            );
            return;
        }
    };

    let (config, issues) = SiteConfig::from_json(bindings.site_config.as_deref());
    set_max_level(config.log_level);

    for issue in &issues {
        log_event(
            LogLevel::Warn,
            "site_config_invalid",
            json!({ "error_class": issue.as_str(), "detail": issue.detail() }),
        );
    }
    for missing in &bindings.missing {
        log_event(
            LogLevel::Info,
            "page_binding_missing",
            json!({ "binding": missing }),
        );
    }
    log_event(
        LogLevel::Debug,
        "page_bindings_resolved",
        json!({ "missing": bindings.missing.len(), "log_level": config.log_level.as_str() }),
    );

    yew::Renderer::<App>::with_root_and_props(
        bindings.mount,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
