pub mod audio;
pub mod names;
pub mod spin;
pub mod storage;
pub mod teams;
pub mod wheel;

use std::cell::RefCell;
use std::rc::Rc;

use audio::SoundBoard;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use names::{
    clean_names, count_label, parse_bulk, push_name, readiness_label, shuffle_names, slice_count,
    MAX_NAMES,
};
use spin::{clamp_duration, Spinner, MIN_SPIN_NAMES};
use storage::{
    clear_wheels, delete_wheel, find_wheel, latest_wheel, load_state, new_wheel_id, save_state,
    save_wheel, sorted_wheels, toggle_panel, Panel, SpinSound, StoredAppState, WinSound,
};
use teams::{
    clamp_team_size, generate as generate_teams, validate as validate_teams, Team,
    TeamsValidation, MAX_TEAM_SIZE, MIN_TEAM_SIZE,
};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wheel::{highlighted_slice, label_font_size, slice_paths};
use yew::prelude::*;

const WHEEL_RADIUS: f64 = 100.0;
// Label sizes are tuned for a wheel roughly 420 px in radius.
const LABEL_SCALE: f64 = WHEEL_RADIUS / 420.0;
const DEFAULT_NAMES: [&str; 4] = ["Antoine", "Julie", "Max", "Sarah"];
const TEST_WIN_DELAY_S: f64 = 0.14;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

#[derive(Clone)]
struct SpinLoop {
    spinner: Rc<RefCell<Spinner>>,
    sounds: Rc<RefCell<SoundBoard>>,
    frame: FrameSlot,
    rotation: UseStateHandle<f64>,
    spinning: UseStateHandle<bool>,
    result: UseStateHandle<Option<String>>,
    spin_sound: SpinSound,
    win_sound: WinSound,
}

impl SpinLoop {
    fn schedule(self) {
        let slot = Rc::clone(&self.frame);
        let handle = request_animation_frame(move |timestamp| self.step(timestamp));
        *slot.borrow_mut() = Some(handle);
    }

    fn step(self, timestamp: f64) {
        self.frame.borrow_mut().take();
        let update = self.spinner.borrow_mut().advance(timestamp);
        self.rotation.set(update.rotation);

        if update.tick && self.spin_sound != SpinSound::None {
            self.sounds.borrow_mut().play_spin(self.spin_sound);
        }

        if let Some(outcome) = update.completed {
            self.result.set(Some(outcome.winner));
            self.sounds.borrow_mut().play_win(self.win_sound);
        }

        let still_spinning = self.spinner.borrow().is_spinning();
        if still_spinning {
            self.schedule();
        } else {
            self.spinning.set(false);
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let persisted_state = use_state(load_state);

    let (initial_names, initial_title) = match latest_wheel(&persisted_state) {
        Some(wheel) => (wheel.loadable_names(), wheel.name.clone()),
        None => (
            DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
            String::new(),
        ),
    };
    let names = use_state(move || initial_names);
    let wheel_title = use_state(move || initial_title);

    let new_name = use_state(String::new);
    let bulk_text = use_state(String::new);
    let rotation = use_state(|| 0.0_f64);
    let spinning = use_state(|| false);
    let result = use_state(|| None::<String>);
    let teams = use_state(Vec::<Team>::new);

    let spinner = use_mut_ref(Spinner::new);
    let initial_gain = persisted_state.settings.gain();
    let sounds = use_mut_ref(move || SoundBoard::new(initial_gain));
    let frame: FrameSlot = use_mut_ref(|| None::<AnimationFrame>);

    let settings = persisted_state.settings.clone();
    let clean = clean_names(names.as_slice());
    let can_spin = !*spinning && clean.len() >= MIN_SPIN_NAMES;
    let team_size = clamp_team_size(settings.team_size);
    let validation = validate_teams(clean.as_slice(), team_size);

    // Spun names stay on the wheel until the list is edited.
    let wheel_names = spinner
        .borrow()
        .shown_names()
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| clean.clone());
    let landed = spinner.borrow().landing().is_some();

    let add_name = {
        let names = names.clone();
        let new_name = new_name.clone();
        let spinner = spinner.clone();
        Callback::from(move |_: ()| {
            let mut next = (*names).clone();
            if push_name(&mut next, &new_name) {
                spinner.borrow_mut().settle();
                names.set(next);
                new_name.set(String::new());
            }
        })
    };

    let on_new_name_input = {
        let new_name = new_name.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let on_new_name_key = {
        let add_name = add_name.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                add_name.emit(());
            }
        })
    };

    let on_edit_name = {
        let names = names.clone();
        let spinner = spinner.clone();
        Callback::from(move |(index, value): (usize, String)| {
            let mut next = (*names).clone();
            if let Some(slot) = next.get_mut(index) {
                *slot = value;
                spinner.borrow_mut().settle();
                names.set(next);
            }
        })
    };

    let on_remove_name = {
        let names = names.clone();
        let spinner = spinner.clone();
        Callback::from(move |index: usize| {
            let mut next = (*names).clone();
            if index < next.len() {
                next.remove(index);
                spinner.borrow_mut().settle();
                names.set(next);
            }
        })
    };

    let on_clear_names = {
        let names = names.clone();
        let result = result.clone();
        let teams = teams.clone();
        let spinner = spinner.clone();
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| {
            names.set(Vec::new());
            result.set(None);
            teams.set(Vec::new());
            let mut spinner = spinner.borrow_mut();
            spinner.settle();
            if spinner.reset() {
                rotation.set(0.0);
            }
        })
    };

    let on_shuffle_names = {
        let names = names.clone();
        let spinner = spinner.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*names).clone();
            shuffle_names(&mut next, &mut rand::thread_rng());
            spinner.borrow_mut().settle();
            names.set(next);
        })
    };

    let on_bulk_input = {
        let bulk_text = bulk_text.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            bulk_text.set(area.value());
        })
    };

    let on_bulk_add = {
        let names = names.clone();
        let spinner = spinner.clone();
        let bulk_text = bulk_text.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*names).clone();
            let mut added = 0;
            for name in parse_bulk(&bulk_text) {
                if push_name(&mut next, &name) {
                    added += 1;
                }
            }
            if added > 0 {
                debug!("Added {} pasted names", added);
                spinner.borrow_mut().settle();
                names.set(next);
            }
            bulk_text.set(String::new());
        })
    };

    let on_spin = {
        let names = names.clone();
        let spinner = spinner.clone();
        let sounds = sounds.clone();
        let frame = frame.clone();
        let rotation = rotation.clone();
        let spinning = spinning.clone();
        let result = result.clone();
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| {
            let clean = clean_names(names.as_slice());
            let started = spinner
                .borrow_mut()
                .start(&clean, now_ms(), &settings.spin, &mut rand::thread_rng())
                .map(|_| ());
            if let Err(err) = started {
                debug!("Spin request ignored: {}", err);
                return;
            }

            sounds.borrow_mut().unlock();
            spinning.set(true);
            result.set(None);

            SpinLoop {
                spinner: spinner.clone(),
                sounds: sounds.clone(),
                frame: frame.clone(),
                rotation: rotation.clone(),
                spinning: spinning.clone(),
                result: result.clone(),
                spin_sound: settings.spin_sound,
                win_sound: settings.win_sound,
            }
            .schedule();
        })
    };

    let on_reset_result = {
        let result = result.clone();
        let spinner = spinner.clone();
        Callback::from(move |_: MouseEvent| {
            spinner.borrow_mut().settle();
            result.set(None);
        })
    };

    let on_team_size = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(size) = input.value().trim().parse::<usize>() {
                update_persisted(&persisted_state, |state| {
                    state.settings.team_size = clamp_team_size(size);
                });
            }
        })
    };

    let on_generate_teams = {
        let names = names.clone();
        let teams = teams.clone();
        Callback::from(move |_: MouseEvent| {
            let clean = clean_names(names.as_slice());
            match generate_teams(&clean, team_size, &mut rand::thread_rng()) {
                Ok(built) => teams.set(built),
                Err(err) => debug!("Teams not generated: {}", err),
            }
        })
    };

    let on_title_input = {
        let wheel_title = wheel_title.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            wheel_title.set(input.value());
        })
    };

    let on_save_wheel = {
        let persisted_state = persisted_state.clone();
        let names = names.clone();
        let wheel_title = wheel_title.clone();
        Callback::from(move |_: MouseEvent| {
            let now = js_sys::Date::now();
            let mut next = (*persisted_state).clone();
            let saved = save_wheel(&mut next, &wheel_title, names.as_slice(), now, || {
                new_wheel_id(&mut rand::thread_rng(), now)
            });
            if saved.is_some() {
                save_state(&next);
                persisted_state.set(next);
                wheel_title.set(String::new());
            }
        })
    };

    let on_load_wheel = {
        let persisted_state = persisted_state.clone();
        let names = names.clone();
        let wheel_title = wheel_title.clone();
        let result = result.clone();
        let teams = teams.clone();
        let spinner = spinner.clone();
        let rotation = rotation.clone();
        Callback::from(move |id: String| {
            if spinner.borrow().is_spinning() {
                return;
            }
            let Some(wheel) = find_wheel(&persisted_state, &id) else {
                return;
            };
            names.set(wheel.loadable_names());
            wheel_title.set(wheel.name.clone());
            result.set(None);
            teams.set(Vec::new());
            spinner.borrow_mut().reset();
            rotation.set(0.0);
        })
    };

    let on_delete_wheel = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |id: String| {
            update_persisted(&persisted_state, |state| {
                delete_wheel(state, &id);
            });
        })
    };

    let on_clear_saved = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |_: MouseEvent| update_persisted(&persisted_state, clear_wheels))
    };

    let on_toggle_panel = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |panel: Panel| {
            update_persisted(&persisted_state, |state| {
                toggle_panel(state, panel);
            });
        })
    };

    let on_spin_sound = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(sound) = SpinSound::from_key(&select.value()) {
                update_persisted(&persisted_state, |state| state.settings.spin_sound = sound);
            }
        })
    };

    let on_win_sound = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(sound) = WinSound::from_key(&select.value()) {
                update_persisted(&persisted_state, |state| state.settings.win_sound = sound);
            }
        })
    };

    let on_volume = {
        let persisted_state = persisted_state.clone();
        let sounds = sounds.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(volume) = input.value().parse::<u8>() {
                let volume = volume.min(100);
                sounds.borrow_mut().set_volume(f64::from(volume) / 100.0);
                update_persisted(&persisted_state, |state| state.settings.volume = volume);
            }
        })
    };

    let on_duration = {
        let persisted_state = persisted_state.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let raw = input.value();
            let duration = match raw.trim() {
                "" => None,
                text => match text.parse::<f64>() {
                    Ok(ms) => Some(clamp_duration(ms)),
                    Err(_) => return,
                },
            };
            update_persisted(&persisted_state, |state| {
                state.settings.spin.duration_override_ms = duration;
            });
        })
    };

    let on_test_sound = {
        let sounds = sounds.clone();
        let spin_sound = settings.spin_sound;
        let win_sound = settings.win_sound;
        Callback::from(move |_: MouseEvent| {
            let mut board = sounds.borrow_mut();
            board.unlock();
            if spin_sound != SpinSound::None {
                board.play_spin(spin_sound);
            }
            board.play_win_after(win_sound, TEST_WIN_DELAY_S);
        })
    };

    let panels = &settings.panels;

    let names_body = render_names_panel(
        &names,
        &new_name,
        &bulk_text,
        *spinning,
        on_new_name_input,
        on_new_name_key,
        Callback::from(move |_: MouseEvent| add_name.emit(())),
        on_edit_name,
        on_remove_name,
        on_clear_names,
        on_shuffle_names,
        on_bulk_input,
        on_bulk_add,
    );

    let teams_body = render_teams_panel(
        team_size,
        &validation,
        &teams,
        on_team_size,
        on_generate_teams,
    );

    let saved_body = render_saved_panel(
        &persisted_state,
        &wheel_title,
        *spinning,
        on_title_input,
        on_save_wheel,
        on_load_wheel,
        on_delete_wheel,
        on_clear_saved,
    );

    let sound_body = render_sound_panel(
        &persisted_state,
        on_spin_sound,
        on_win_sound,
        on_volume,
        on_duration,
        on_test_sound,
    );

    html! {
        <div class="app-container">
            <header class="topbar">
                <h1>{ "Name Wheel" }</h1>
                <span class="stats-pill">{ count_label(slice_count(names.as_slice())) }</span>
            </header>
            <main class="content">
                <section class="wheel-column">
                    { render_wheel(&wheel_names, *rotation, *spinning, landed) }
                    <div class="wheel-controls">
                        <button class="spin-button" disabled={!can_spin} onclick={on_spin.clone()}>
                            { if *spinning { "Spinning…" } else { "Spin" } }
                        </button>
                        <span class="wheel-info">{ readiness_label(clean.len()) }</span>
                    </div>
                    <div class="result-card">
                        <span class="result-label">{ "Winner" }</span>
                        <span class="result-name">{ result.as_deref().unwrap_or("—") }</span>
                        <button class="ghost" onclick={on_reset_result}>{ "Reset" }</button>
                    </div>
                    <button class="center-go" disabled={!can_spin} onclick={on_spin}>{ "GO" }</button>
                </section>
                <section class="panel-column">
                    { render_panel("Names", Panel::Names, panels.is_open(Panel::Names), &on_toggle_panel, names_body) }
                    { render_panel("Teams", Panel::Teams, panels.is_open(Panel::Teams), &on_toggle_panel, teams_body) }
                    { render_panel("Saved wheels", Panel::Saved, panels.is_open(Panel::Saved), &on_toggle_panel, saved_body) }
                    { render_panel("Sound", Panel::Sound, panels.is_open(Panel::Sound), &on_toggle_panel, sound_body) }
                </section>
            </main>
        </div>
    }
}

fn update_persisted(
    handle: &UseStateHandle<StoredAppState>,
    edit: impl FnOnce(&mut StoredAppState),
) {
    let mut next = (**handle).clone();
    edit(&mut next);
    save_state(&next);
    handle.set(next);
}

fn now_ms() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn render_panel(
    title: &str,
    panel: Panel,
    open: bool,
    on_toggle: &Callback<Panel>,
    body: Html,
) -> Html {
    let toggle = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(panel))
    };

    html! {
        <div class={classes!("card", "collapsible", if open { None } else { Some("collapsed") })}>
            <button class="collapsible-hd" aria-expanded={open.to_string()} onclick={toggle}>
                <span>{ title }</span>
                <span class="chevron">{ if open { "▾" } else { "▸" } }</span>
            </button>
            {
                if open {
                    html! { <div class="collapsible-bd">{ body }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_wheel(wheel_names: &[String], rotation: f64, spinning: bool, landed: bool) -> Html {
    let count = wheel_names.len();
    let transform = format!("rotate({:.4})", rotation.to_degrees());
    let highlighted = if landed && !spinning {
        highlighted_slice(count, rotation)
    } else {
        None
    };
    let font_size = format!("{:.2}", label_font_size(count) * LABEL_SCALE);

    let slices = match count {
        0 => html! {
            <>
                <circle r={WHEEL_RADIUS.to_string()} class="wheel-empty" />
                <text class="wheel-placeholder" text-anchor="middle" dominant-baseline="middle"
                    transform={format!("rotate({:.4})", -rotation.to_degrees())}>
                    { "Add names" }
                </text>
            </>
        },
        1 => html! {
            <>
                <circle r={WHEEL_RADIUS.to_string()} fill="hsl(0, 70%, 55%)" class="slice" />
                <text class="slice-label" font-size={font_size.clone()} text-anchor="middle"
                    dominant-baseline="middle"
                    transform={format!("translate({:.3} 0)", WHEEL_RADIUS * wheel::LABEL_RADIUS_RATIO)}>
                    { names::ellipsize(&wheel_names[0], wheel::LABEL_MAX_CHARS) }
                </text>
            </>
        },
        _ => html! {
            <>
                { for slice_paths(wheel_names, WHEEL_RADIUS).into_iter().map(|path| {
                    let active = highlighted == Some(path.index);
                    html! {
                        <g key={path.index}>
                            <path
                                class={classes!("slice", active.then_some("active"))}
                                d={path.svg_d(WHEEL_RADIUS)}
                                fill={format!("hsl({}, 70%, 55%)", path.hue)} />
                            <text class="slice-label" font-size={font_size.clone()}
                                text-anchor="middle" dominant-baseline="middle"
                                transform={format!(
                                    "rotate({:.3}) translate({:.3} 0)",
                                    path.label_angle_deg, path.label_offset
                                )}>
                                { path.label.clone() }
                            </text>
                        </g>
                    }
                }) }
            </>
        },
    };

    let view_box = format!(
        "{0} {0} {1} {1}",
        -(WHEEL_RADIUS + 14.0),
        2.0 * (WHEEL_RADIUS + 14.0)
    );
    html! {
        <svg class={classes!("wheel", spinning.then_some("spinning"))} viewBox={view_box}>
            <g transform={transform}>
                { slices }
                <circle r={WHEEL_RADIUS.to_string()} class="wheel-rim" fill="none" />
            </g>
            <polygon class="wheel-pointer"
                points={format!("0,{:.1} -8,{:.1} 8,{:.1}", -WHEEL_RADIUS + 10.0, -WHEEL_RADIUS - 12.0, -WHEEL_RADIUS - 12.0)} />
        </svg>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_names_panel(
    names: &UseStateHandle<Vec<String>>,
    new_name: &UseStateHandle<String>,
    bulk_text: &UseStateHandle<String>,
    spinning: bool,
    on_new_name_input: Callback<InputEvent>,
    on_new_name_key: Callback<KeyboardEvent>,
    on_add: Callback<MouseEvent>,
    on_edit: Callback<(usize, String)>,
    on_remove: Callback<usize>,
    on_clear: Callback<MouseEvent>,
    on_shuffle: Callback<MouseEvent>,
    on_bulk_input: Callback<InputEvent>,
    on_bulk_add: Callback<MouseEvent>,
) -> Html {
    let full = names.len() >= MAX_NAMES;

    let rows = if names.is_empty() {
        html! { <p class="small">{ "Add names to be able to spin the wheel." }</p> }
    } else {
        html! {
            <div class="names-list">
                { for names.iter().enumerate().map(|(index, name)| {
                    render_name_row(index, name, &on_edit, &on_remove)
                }) }
            </div>
        }
    };

    html! {
        <>
            <div class="row">
                <input type="text" placeholder="New name" value={(**new_name).clone()}
                    disabled={full} oninput={on_new_name_input} onkeydown={on_new_name_key} />
                <button disabled={full} onclick={on_add}>{ "Add" }</button>
            </div>
            { rows }
            <div class="row">
                <button onclick={on_shuffle}>{ "Shuffle" }</button>
                <button class="danger" disabled={spinning} onclick={on_clear}>{ "Clear" }</button>
            </div>
            <textarea class="bulk" placeholder="Paste names, one per line or comma separated"
                value={(**bulk_text).clone()} oninput={on_bulk_input} />
            <button disabled={full || bulk_text.trim().is_empty()} onclick={on_bulk_add}>
                { "Add pasted names" }
            </button>
        </>
    }
}

fn render_name_row(
    index: usize,
    name: &str,
    on_edit: &Callback<(usize, String)>,
    on_remove: &Callback<usize>,
) -> Html {
    let oninput = {
        let on_edit = on_edit.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_edit.emit((index, input.value()));
        })
    };
    let onclick = {
        let on_remove = on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(index))
    };

    html! {
        <div class="name-item" key={index}>
            <input type="text" placeholder="Name" value={name.to_owned()} {oninput} />
            <button class="danger" {onclick}>{ "Delete" }</button>
        </div>
    }
}

fn render_teams_panel(
    team_size: usize,
    validation: &TeamsValidation,
    teams: &UseStateHandle<Vec<Team>>,
    on_team_size: Callback<Event>,
    on_generate: Callback<MouseEvent>,
) -> Html {
    let status = match validation {
        TeamsValidation::Valid { team_count, .. } => html! {
            <p class="small ok">{ format!("{team_count} teams of {team_size}") }</p>
        },
        TeamsValidation::Invalid(reason) => html! {
            <p class={classes!("small", "error", reason.code())}>{ reason.to_string() }</p>
        },
    };

    let label = if teams.is_empty() {
        "Make teams"
    } else {
        "Reshuffle teams"
    };

    html! {
        <>
            <div class="row">
                <label for="team-size">{ "Team size" }</label>
                <input id="team-size" type="number"
                    min={MIN_TEAM_SIZE.to_string()} max={MAX_TEAM_SIZE.to_string()}
                    value={team_size.to_string()} onchange={on_team_size} />
                <button disabled={!validation.is_valid()} onclick={on_generate}>{ label }</button>
            </div>
            { status }
            <div class="team-grid">
                { for teams.iter().map(|team| html! {
                    <div class="team-card" key={team.label.clone()}>
                        <h4>{ &team.label }</h4>
                        <ul>
                            { for team.members.iter().map(|member| html! { <li>{ member }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_saved_panel(
    state: &StoredAppState,
    wheel_title: &UseStateHandle<String>,
    spinning: bool,
    on_title_input: Callback<InputEvent>,
    on_save: Callback<MouseEvent>,
    on_load: Callback<String>,
    on_delete: Callback<String>,
    on_clear: Callback<MouseEvent>,
) -> Html {
    let wheels = sorted_wheels(state);

    let list = if wheels.is_empty() {
        html! { <p class="small">{ "No saved wheels yet." }</p> }
    } else {
        html! {
            <div class="saved-list">
                { for wheels.into_iter().map(|wheel| {
                    let load = {
                        let on_load = on_load.clone();
                        let id = wheel.id.clone();
                        Callback::from(move |_: MouseEvent| on_load.emit(id.clone()))
                    };
                    let delete = {
                        let on_delete = on_delete.clone();
                        let id = wheel.id.clone();
                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                    };
                    html! {
                        <div class="saved-item" key={wheel.id.clone()}>
                            <div class="meta">
                                <div class="n">{ wheel.display_name() }</div>
                                <div class="c">{ count_label(wheel.names.len()) }</div>
                            </div>
                            <div class="actions">
                                <button disabled={spinning} onclick={load}>{ "Load" }</button>
                                <button class="danger" onclick={delete}>{ "Delete" }</button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <>
            <div class="row">
                <input type="text" placeholder="Wheel name" value={(**wheel_title).clone()}
                    oninput={on_title_input} />
                <button onclick={on_save}>{ "Save" }</button>
            </div>
            { list }
            <button class="danger" onclick={on_clear}>{ "Delete all" }</button>
        </>
    }
}

fn render_sound_panel(
    state: &StoredAppState,
    on_spin_sound: Callback<Event>,
    on_win_sound: Callback<Event>,
    on_volume: Callback<InputEvent>,
    on_duration: Callback<Event>,
    on_test: Callback<MouseEvent>,
) -> Html {
    let settings = &state.settings;
    let duration = settings
        .spin
        .duration_override_ms
        .map(|ms| format!("{ms:.0}"))
        .unwrap_or_default();

    html! {
        <>
            <div class="row">
                <label>{ "Spin sound" }</label>
                <select onchange={on_spin_sound}>
                    { for SpinSound::ALL.into_iter().map(|sound| html! {
                        <option value={sound.key()} selected={sound == settings.spin_sound}>
                            { sound.label() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="row">
                <label>{ "Win sound" }</label>
                <select onchange={on_win_sound}>
                    { for WinSound::ALL.into_iter().map(|sound| html! {
                        <option value={sound.key()} selected={sound == settings.win_sound}>
                            { sound.label() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="row">
                <label>{ format!("Volume {}", settings.volume) }</label>
                <input type="range" min="0" max="100" value={settings.volume.to_string()}
                    oninput={on_volume} />
            </div>
            <div class="row">
                <label>{ "Spin duration (ms)" }</label>
                <input type="number" min="800" max="15000" step="100" placeholder="random"
                    value={duration} onchange={on_duration} />
            </div>
            <button onclick={on_test}>{ "Test sound" }</button>
        </>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
