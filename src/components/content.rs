use std::cell::RefCell;

use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::custom_button::CustomButton;
use crate::motion::gates::{stagger_window, HysteresisGate, ScrollDirection};
use crate::motion::scroll::ScrollMotion;
use crate::motion::transform::map_range;
use crate::theme;

/// Bird progress: the tail of smoothed progress past the content
/// threshold, pinned to 0 until the content screen has taken over.
fn bird_progress(smoothed: f64, showing: bool) -> f64 {
    if showing {
        map_range(smoothed, (theme::SHOW_CONTENT_PROGRESS, 1.0), (0.0, 1.0))
    } else {
        0.0
    }
}

struct ContentFrame {
    bird_x_vw: f64,
    title_y_px: f64,
    title_opacity: f64,
    desc_y_px: f64,
    desc_opacity: f64,
}

fn content_frame(bird: f64) -> ContentFrame {
    ContentFrame {
        bird_x_vw: map_range(bird, (0.0, 1.0), (-20.0, 120.0)),
        title_y_px: map_range(bird, (0.0, 0.3), (100.0, 0.0)),
        title_opacity: map_range(bird, (0.0, 0.3), (0.0, 1.0)),
        desc_y_px: map_range(bird, (0.2, 0.5), (100.0, 0.0)),
        desc_opacity: map_range(bird, (0.2, 0.5), (0.0, 1.0)),
    }
}

/// (opacity, translate-y px) of the i-th nav button at a bird progress.
fn button_frame(bird: f64, index: usize) -> (f64, f64) {
    let reveal = stagger_window(
        index,
        theme::BUTTON_STAGGER_BASE,
        theme::BUTTON_STAGGER_STEP,
        theme::BUTTON_REVEAL_WIDTH,
    );
    (
        map_range(bird, reveal, (0.0, 1.0)),
        map_range(bird, reveal, (50.0, 0.0)),
    )
}

/// Smooth-scroll to the section with the given anchor id. A missing
/// anchor is a silent no-op.
fn scroll_to_anchor(anchor: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(section) = document.get_element_by_id(anchor) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    pub scroll: ScrollMotion,
}

#[function_component(Content)]
pub fn content(props: &ContentProps) -> Html {
    let show_content = use_state_eq(|| false);
    let animation_finished = use_state_eq(|| false);
    let direction = use_state_eq(|| ScrollDirection::Down);

    let bird_ref = use_node_ref();
    let title_ref = use_node_ref();
    let desc_ref = use_node_ref();
    let button_refs = use_memo(
        |_| {
            (0..theme::SECTIONS.len())
                .map(|_| NodeRef::default())
                .collect::<Vec<_>>()
        },
        (),
    );

    {
        let scroll = props.scroll.clone();
        let show_content = show_content.clone();
        let animation_finished = animation_finished.clone();
        let direction = direction.clone();
        let bird_ref = bird_ref.clone();
        let title_ref = title_ref.clone();
        let desc_ref = desc_ref.clone();
        let button_refs = button_refs.clone();
        use_effect_with_deps(
            move |_| {
                let show_sub = {
                    let show_content = show_content.clone();
                    scroll.progress().subscribe(move |progress| {
                        show_content.set(progress > theme::SHOW_CONTENT_PROGRESS);
                    })
                };

                let direction_sub = {
                    let direction = direction.clone();
                    scroll
                        .direction()
                        .subscribe(move |current| direction.set(current))
                };

                let frame_sub = {
                    let scroll = scroll.clone();
                    let finish_gate = RefCell::new(HysteresisGate::new(
                        theme::BIRD_FINISH_AT,
                        theme::BIRD_REARM_BELOW,
                    ));
                    scroll.smoothed().subscribe(move |smoothed| {
                        let showing = scroll.progress().get() > theme::SHOW_CONTENT_PROGRESS;
                        let bird = bird_progress(smoothed, showing);
                        let frame = content_frame(bird);
                        if let Some(el) = bird_ref.cast::<web_sys::Element>() {
                            let _ = el.set_attribute(
                                "style",
                                &format!("transform: translateX({:.2}vw);", frame.bird_x_vw),
                            );
                        }
                        if let Some(el) = title_ref.cast::<web_sys::Element>() {
                            let _ = el.set_attribute(
                                "style",
                                &format!(
                                    "transform: translateY({:.1}px); opacity: {:.3};",
                                    frame.title_y_px, frame.title_opacity
                                ),
                            );
                        }
                        if let Some(el) = desc_ref.cast::<web_sys::Element>() {
                            let _ = el.set_attribute(
                                "style",
                                &format!(
                                    "transform: translateY({:.1}px); opacity: {:.3};",
                                    frame.desc_y_px, frame.desc_opacity
                                ),
                            );
                        }
                        for (index, node) in button_refs.iter().enumerate() {
                            if let Some(el) = node.cast::<web_sys::Element>() {
                                let (opacity, y) = button_frame(bird, index);
                                let _ = el.set_attribute(
                                    "style",
                                    &format!(
                                        "opacity: {opacity:.3}; transform: translateY({y:.1}px);"
                                    ),
                                );
                            }
                        }
                        let current = scroll.direction().get();
                        animation_finished.set(finish_gate.borrow_mut().update(bird, current));
                    })
                };

                move || {
                    drop(show_sub);
                    drop(direction_sub);
                    drop(frame_sub);
                }
            },
            (),
        );
    }

    let buttons = theme::SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let anchor = section.anchor;
            let onclick = Callback::from(move |_: MouseEvent| scroll_to_anchor(anchor));
            html! {
                <div class="nav-slot" key={section.anchor} ref={button_refs[index].clone()}>
                    <CustomButton text={section.label} onclick={onclick} />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class={classes!("content-screen", (*animation_finished).then(|| "is-unlocked"))}>
            {
                if *show_content {
                    html! {
                        <div class="bird-track" ref={bird_ref.clone()}>
                            <img
                                src={theme::BIRD_GIF}
                                alt="Flying bird"
                                class={classes!("bird", (*direction == ScrollDirection::Up).then(|| "is-flipped"))}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if *show_content {
                    html! { <nav class="floating-nav">{ buttons }</nav> }
                } else {
                    html! {}
                }
            }
            <div class="intro-panel">
                {
                    if *show_content {
                        html! {
                            <>
                                <h1 class="intro-title" ref={title_ref.clone()}>
                                    {"Welcome to My Site"}
                                </h1>
                                <p class="intro-description" ref={desc_ref.clone()}>
                                    {"This is a single-page scroll-activated website. Use the \
                                      navigation buttons below to explore different sections."}
                                </p>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            { for theme::SECTIONS.iter().map(|section| html! {
                <section
                    id={section.anchor}
                    class="content-section"
                    style={format!("background-color: {};", section.tint)}
                >
                    <div class="section-inner">
                        <h2>{ section.label }</h2>
                        <p>{ section.blurb }</p>
                    </div>
                </section>
            }) }
            <style>
                {r#"
                .content-screen {
                    background-color: #b6b992;
                    width: 100vw;
                    height: 100vh;
                    font-family: DidotBoldItalic;
                    overflow: hidden;
                    position: relative;
                }

                .content-screen.is-unlocked {
                    overflow: auto;
                }

                .bird-track {
                    position: fixed;
                    top: 5vh;
                    left: 0;
                    z-index: 999;
                    transform: translateX(-20vw);
                }

                .bird {
                    width: 190px;
                    height: auto;
                    transition: transform 0.3s ease-in-out;
                }

                .bird.is-flipped {
                    transform: scaleX(-1);
                }

                .floating-nav {
                    position: fixed;
                    bottom: 2rem;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    display: flex;
                    justify-content: space-evenly;
                    align-items: center;
                    background-color: rgba(182, 185, 146, 0.9);
                    padding: 1rem 2rem;
                    margin: 0 2rem;
                    border-radius: 50px;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .nav-slot {
                    opacity: 0;
                }

                .custom-button {
                    background-size: contain;
                    background-repeat: no-repeat;
                    background-position: center;
                    width: 200px;
                    height: 70px;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    cursor: pointer;
                    font-family: DidotBoldItalic;
                    color: #454525;
                    font-size: 1rem;
                    text-align: center;
                    user-select: none;
                    transition: transform 0.15s ease;
                }

                .custom-button:hover {
                    transform: scale(1.05);
                }

                .custom-button:active {
                    transform: scale(0.95);
                }

                .intro-panel {
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    text-align: center;
                    background-color: #b6b992;
                }

                .intro-title {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    color: #454525;
                    opacity: 0;
                }

                .intro-description {
                    max-width: 600px;
                    margin-bottom: 3rem;
                    color: #454525;
                    font-size: 1.1rem;
                    line-height: 1.6;
                    opacity: 0;
                }

                .content-section {
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #454525;
                }

                .section-inner {
                    text-align: center;
                }

                .section-inner h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{bird_progress, button_frame, content_frame};

    #[test]
    fn bird_is_pinned_until_content_shows() {
        assert_eq!(bird_progress(0.95, false), 0.0);
        assert!(bird_progress(0.95, true) > 0.0);
    }

    #[test]
    fn bird_sweeps_from_offscreen_to_offscreen() {
        assert_eq!(content_frame(0.0).bird_x_vw, -20.0);
        assert_eq!(content_frame(1.0).bird_x_vw, 120.0);
    }

    #[test]
    fn text_reveals_stay_clamped() {
        for i in 0..=100 {
            let frame = content_frame(i as f64 / 100.0);
            assert!((0.0..=1.0).contains(&frame.title_opacity));
            assert!((0.0..=100.0).contains(&frame.title_y_px));
            assert!((0.0..=1.0).contains(&frame.desc_opacity));
            assert!((0.0..=100.0).contains(&frame.desc_y_px));
        }
    }

    #[test]
    fn description_trails_title() {
        let frame = content_frame(0.3);
        assert_eq!(frame.title_opacity, 1.0);
        assert!(frame.desc_opacity < 1.0);
    }

    #[test]
    fn buttons_reveal_in_index_order() {
        // Mid-reveal, every button is strictly ahead of the next one.
        let bird = 0.35;
        for index in 0..3 {
            let (opacity, _) = button_frame(bird, index);
            let (next_opacity, _) = button_frame(bird, index + 1);
            assert!(
                opacity > next_opacity,
                "button {index} not ahead of {}",
                index + 1
            );
        }
    }

    #[test]
    fn buttons_saturate_at_full_progress() {
        for index in 0..4 {
            let (opacity, y) = button_frame(1.0, index);
            assert_eq!(opacity, 1.0);
            assert_eq!(y, 0.0);
        }
    }
}
