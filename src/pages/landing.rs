use log::info;
use yew::prelude::*;

use crate::components::content::Content;
use crate::motion::scroll::ScrollMotion;
use crate::motion::transform::map_range;
use crate::theme;

/// Visual parameters of the hero at a given smoothed progress.
struct HeroFrame {
    bg_scale: f64,
    bg_blur_px: f64,
    frame_scale: f64,
    content_opacity: f64,
}

fn hero_frame(progress: f64) -> HeroFrame {
    HeroFrame {
        bg_scale: map_range(progress, (0.0, 0.5), (1.0, 8.0)),
        bg_blur_px: map_range(progress, (0.4, 0.6), (0.0, 20.0)),
        frame_scale: map_range(progress, (0.0, 0.5), (0.8, 5.0)),
        content_opacity: map_range(progress, (0.6, 0.8), (0.0, 1.0)),
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // The one scroll pipeline for the whole page; Content reads the same
    // source through its prop.
    let scroll = use_memo(|_| ScrollMotion::mount(), ());
    let has_scrolled_once = use_state_eq(|| false);

    let background_ref = use_node_ref();
    let frame_ref = use_node_ref();
    let creatures_ref = use_node_ref();
    let content_layer_ref = use_node_ref();

    {
        let scroll = (*scroll).clone();
        let has_scrolled_once = has_scrolled_once.clone();
        let background_ref = background_ref.clone();
        let frame_ref = frame_ref.clone();
        let creatures_ref = creatures_ref.clone();
        let content_layer_ref = content_layer_ref.clone();
        use_effect_with_deps(
            move |_| {
                info!("Mounting hero scroll sequence");
                let hint_sub = {
                    let has_scrolled_once = has_scrolled_once.clone();
                    scroll.y().subscribe(move |y| {
                        if y > theme::SCROLL_HINT_DISMISS_PX {
                            has_scrolled_once.set(true);
                        }
                    })
                };
                let hero_sub = scroll.smoothed().subscribe(move |progress| {
                    let frame = hero_frame(progress);
                    if let Some(el) = background_ref.cast::<web_sys::Element>() {
                        let _ = el.set_attribute(
                            "style",
                            &format!(
                                "transform: scale({:.3}); filter: blur({:.2}px);",
                                frame.bg_scale, frame.bg_blur_px
                            ),
                        );
                    }
                    if let Some(el) = frame_ref.cast::<web_sys::Element>() {
                        let _ = el.set_attribute(
                            "style",
                            &format!("transform: scale({:.3});", frame.frame_scale),
                        );
                    }
                    if let Some(el) = creatures_ref.cast::<web_sys::Element>() {
                        let _ = el.set_attribute(
                            "style",
                            &format!("transform: scale({:.3});", frame.frame_scale),
                        );
                    }
                    if let Some(el) = content_layer_ref.cast::<web_sys::Element>() {
                        let active = frame.content_opacity > theme::CONTENT_ACTIVE_OPACITY;
                        let _ = el.set_attribute(
                            "style",
                            &format!(
                                "opacity: {:.3}; z-index: {}; pointer-events: {};",
                                frame.content_opacity,
                                if active { 10 } else { 0 },
                                if active { "auto" } else { "none" },
                            ),
                        );
                    }
                });
                move || {
                    drop(hint_sub);
                    drop(hero_sub);
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-track">
            <div class="hero-viewport">
                <img
                    src={theme::BACKGROUND_IMAGE}
                    alt="Background"
                    class="hero-background"
                    ref={background_ref.clone()}
                />
                <div class="frame-layer">
                    <div class="frame-scaler" ref={frame_ref.clone()}>
                        <img src={theme::FRAME_IMAGE} alt="Frame" class="frame-image" />
                        <div class="greeting">
                            <div class="greeting-small">{"Welcome to"}</div>
                            <div class="greeting-name">{"MEADOWLARK'S"}</div>
                            <div class="greeting-small">{"Website"}</div>
                        </div>
                    </div>
                </div>
                <div class="creatures-layer">
                    <img
                        src={theme::CREATURES_IMAGE}
                        alt="Creatures"
                        class="creatures-image"
                        ref={creatures_ref.clone()}
                    />
                </div>
                <div class={classes!("scroll-hint", (*has_scrolled_once).then(|| "is-dismissed"))}>
                    {"Scroll down ↓"}
                </div>
                <div class="content-layer" ref={content_layer_ref.clone()}>
                    <Content scroll={(*scroll).clone()} />
                </div>
            </div>
            <style>
                {r#"
                .scroll-track {
                    height: 500vh;
                    background-color: #000;
                }

                .hero-viewport {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    width: 100vw;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: 0;
                }

                .frame-layer {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100vw;
                    height: 100vh;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1;
                    pointer-events: none;
                }

                .frame-scaler {
                    transform: scale(0.8);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .frame-image {
                    max-width: 90vw;
                    max-height: 90vh;
                    object-fit: contain;
                }

                .greeting {
                    margin-top: -90px;
                    text-align: center;
                    line-height: 1.4;
                }

                .greeting-small {
                    font-family: DidotBoldItalic;
                    font-size: 13px;
                    color: #454525;
                }

                .greeting-name {
                    font-family: BirkaSemiBold;
                    font-size: 23px;
                    color: #454525;
                }

                .creatures-layer {
                    position: absolute;
                    top: 53%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    z-index: 2;
                }

                .creatures-image {
                    transform: scale(0.8);
                    width: auto;
                    height: auto;
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 30px;
                    left: 46%;
                    color: #ffffff;
                    font-size: 1.2rem;
                    font-family: DidotBoldItalic;
                    letter-spacing: 1px;
                    z-index: 5;
                    pointer-events: none;
                    opacity: 0.6;
                    transition: opacity 1s ease;
                    animation: hint-bob 2s ease-in-out infinite alternate;
                }

                .scroll-hint.is-dismissed {
                    opacity: 0;
                }

                @keyframes hint-bob {
                    from { transform: translateX(-50%) translateY(0); }
                    to { transform: translateX(-50%) translateY(-5px); }
                }

                .content-layer {
                    position: relative;
                    top: 0;
                    left: 0;
                    width: 100vw;
                    height: 100vh;
                    overflow: hidden;
                    opacity: 0;
                    z-index: 0;
                    pointer-events: none;
                }
                "#}
            </style>
        </div>
    }
}
