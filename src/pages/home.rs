use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::page_animations::PageAnimations;
use crate::components::scroll_top::ScrollTop;
use crate::config;

struct Build {
    title: &'static str,
    description: &'static str,
    plugins: [&'static str; 3],
}

const BUILDS: [Build; 4] = [
    Build {
        title: "Video editor",
        description: "Add timeline, codecs, color tools, and export plugins to assemble \
                      a modern editor that you control end-to-end.",
        plugins: [
            "Timeline & sequencing",
            "GPU accelerated codecs",
            "Color grading nodes",
        ],
    },
    Build {
        title: "DAW / audio workstation",
        description: "Compose MIDI, DSP, and synth plugins to craft a DAW tailored to \
                      your workflow without the bloat.",
        plugins: ["MIDI routing", "Audio graph", "FX + instrument racks"],
    },
    Build {
        title: "Motion graphics suite",
        description: "Mix animation canvas, rigs, and simulation plugins for procedural \
                      motion design and VFX work.",
        plugins: ["Animation canvas", "Rigging layers", "Simulation kernels"],
    },
    Build {
        title: "Your own tool",
        description: "Prototype experimental creative software by composing only the \
                      primitives you need. Lunaris stays out of the way.",
        plugins: ["Custom UI", "Domain specific ops", "Shared plugin APIs"],
    },
];

struct ArchitecturePoint {
    title: &'static str,
    detail: &'static str,
}

const ARCHITECTURE_POINTS: [ArchitecturePoint; 4] = [
    ArchitecturePoint {
        title: "Microkernel core",
        detail: "Roughly 400 lines that handle GPU init (wgpu), ECS, scheduling, and \
                 messaging. Everything else is a plugin.",
    },
    ArchitecturePoint {
        title: "Plugins define behavior",
        detail: "UI, codecs, tools, storage, and workflows live in plugins. Replace or \
                 fork them without touching the core.",
    },
    ArchitecturePoint {
        title: "Compose like VSCode",
        detail: "Each plugin exports APIs that other plugins call directly. Compose them \
                 just like VSCode extensions or Emacs lisp.",
    },
    ArchitecturePoint {
        title: "Static linking for speed",
        detail: "Plugins are Rust crates linked statically, so you keep type safety and \
                 zero-cost abstractions.",
    },
];

const PILLARS: [(&str, &str); 3] = [
    (
        "Built in Rust",
        "Microkernel core (~400 LOC) keeps the runtime predictable.",
    ),
    (
        "Extensible",
        "Add, remove, or swap plugins without forks or rewrites.",
    ),
    (
        "Composable",
        "Plugins expose APIs so other plugins can call into them directly.",
    ),
];

const DEVELOPER_HIGHLIGHTS: [&str; 4] = [
    "Write plugins in Rust with type-safe APIs and no virtual machine.",
    "Call other plugins directly\u{2014}no black-box IPC or fragile scripting layers.",
    "Drop to native when needed: Metal, Vulkan, DX12 via wgpu boundaries.",
    "Ship cross-platform builds (Windows, macOS, Linux) from one codebase.",
];

const PLUGIN_SNIPPET: &str = r#"use lunaris::prelude::*;

pub struct TimelinePlugin;

impl Plugin for TimelinePlugin {
    fn register(&self, registry: &mut PluginRegistry) {
        registry.register_tool("timeline", TimelineTool::new());
        registry.register_codec("h264", H264Codec::new());
    }
    fn name(&self) -> &str {
        "Timeline Plugin"
    }
    fn version(&self) -> &str {
        "0.1.0"
    }
    fn description(&self) -> &str {
        "Provides timeline and codec support for video editing."
    }
}
"#;

struct EntryPoint {
    title: &'static str,
    description: &'static str,
    actions: &'static [(&'static str, &'static str)],
}

const ENTRY_POINTS: [EntryPoint; 2] = [
    EntryPoint {
        title: "For power users",
        description: "Download Lunaris bundled with the video editor stack and start \
                      editing with a transparent pipeline.",
        actions: &[("Download build", config::RELEASES_URL)],
    },
    EntryPoint {
        title: "For plugin developers",
        description: "Follow the ten-minute tutorial to write your first plugin and \
                      compose it with the existing stack.",
        actions: &[
            ("Read tutorial", config::DOCS_URL),
            ("Open repo", config::GITHUB_URL),
        ],
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let home_css = r#"
        .home {
            color: #FFFEED;
            font-family: 'Inter', sans-serif;
        }
        .home section {
            padding: 6rem 1.5rem;
        }
        .section-inner {
            margin: 0 auto;
            max-width: 64rem;
        }
        .section-inner.wide {
            max-width: 72rem;
        }
        .section-head {
            text-align: center;
            margin-bottom: 3rem;
        }
        .section-tag {
            margin: 0;
            font-family: 'Montserrat', sans-serif;
            font-size: 0.875rem;
            text-transform: uppercase;
            letter-spacing: 0.3em;
            color: #a5b4fc;
        }
        .section-tag.accent {
            color: #6ee7b7;
        }
        .section-title {
            margin: 1rem 0 0;
            font-size: 2.25rem;
            font-weight: 600;
        }
        .section-lead {
            margin: 0.75rem auto 0;
            max-width: 48rem;
            font-size: 1.125rem;
            color: #e0e7ff;
        }
        .pillar-grid {
            display: grid;
            gap: 1.5rem;
            margin-top: 1.5rem;
            grid-template-columns: repeat(3, 1fr);
            text-align: left;
        }
        .pillar {
            border-radius: 1rem;
            border: 1px solid rgba(49, 46, 129, 0.4);
            background: #080414;
            padding: 1.5rem;
        }
        .pillar-label {
            margin: 0;
            font-size: 0.875rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: #a5b4fc;
        }
        .pillar p {
            margin: 0.75rem 0 0;
            color: #e0e7ff;
        }
        .build-grid {
            display: grid;
            gap: 2rem;
            grid-template-columns: repeat(2, 1fr);
        }
        .build-card {
            border-radius: 1.5rem;
            border: 1px solid rgba(49, 46, 129, 0.5);
            background: linear-gradient(to bottom right, #0B0520, #050312);
            padding: 2rem;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.3);
        }
        .build-card h3 {
            margin: 0;
            font-size: 1.5rem;
            font-weight: 600;
        }
        .build-card > p {
            margin: 1rem 0 0;
            color: #e0e7ff;
        }
        .build-card ul {
            list-style: none;
            margin: 1.5rem 0 0;
            padding: 0;
        }
        .build-card li {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 0.5rem;
            font-size: 0.875rem;
            color: #c7d2fe;
        }
        .build-card li::before {
            content: "";
            flex-shrink: 0;
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 9999px;
            background: #34d399;
        }
        .architecture-grid {
            display: grid;
            gap: 3rem;
            grid-template-columns: 1fr 1fr;
            align-items: start;
        }
        .architecture-grid .section-tag,
        .architecture-grid .section-title,
        .architecture-grid .section-lead {
            text-align: left;
            margin-left: 0;
        }
        .arch-points {
            margin-top: 2rem;
            display: grid;
            gap: 1.5rem;
        }
        .arch-point {
            border-radius: 1rem;
            border: 1px solid rgba(49, 46, 129, 0.4);
            background: #080414;
            padding: 1.5rem;
        }
        .arch-point h3 {
            margin: 0;
            font-size: 1.25rem;
            font-weight: 600;
        }
        .arch-point p {
            margin: 0.5rem 0 0;
            color: #e0e7ff;
        }
        .snippet-panel {
            border-radius: 1.5rem;
            border: 1px solid rgba(49, 46, 129, 0.5);
            background: #09031A;
            padding: 1.5rem;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4);
        }
        .snippet-head {
            display: flex;
            align-items: center;
            justify-content: space-between;
            margin-bottom: 1rem;
            font-size: 0.875rem;
            color: #a5b4fc;
        }
        .snippet-panel pre {
            overflow-x: auto;
            margin: 0;
            border-radius: 1rem;
            background: #05010D;
            padding: 1.5rem;
            font-size: 0.875rem;
            text-align: left;
            color: #a7f3d0;
        }
        .highlight-grid {
            display: grid;
            gap: 1.5rem;
            margin-top: 2.5rem;
            grid-template-columns: repeat(2, 1fr);
            text-align: left;
        }
        .highlight-card {
            border-radius: 1rem;
            border: 1px solid rgba(16, 185, 129, 0.2);
            background: #050814;
            padding: 1.5rem;
        }
        .highlight-card .bar {
            height: 0.25rem;
            width: 3rem;
            margin-bottom: 0.75rem;
            border-radius: 9999px;
            background: #34d399;
        }
        .highlight-card p {
            margin: 0;
            color: #e0e7ff;
        }
        .entry-grid {
            display: grid;
            gap: 2rem;
            margin: 3rem auto 0;
            max-width: 64rem;
            grid-template-columns: repeat(2, 1fr);
            text-align: left;
        }
        .entry-card {
            display: flex;
            flex-direction: column;
            border-radius: 1.5rem;
            border: 1px solid rgba(49, 46, 129, 0.4);
            background: #080414;
            padding: 2rem;
        }
        .entry-card h3 {
            margin: 0;
            font-size: 1.5rem;
            font-weight: 600;
        }
        .entry-card > p {
            margin: 1rem 0 0;
            color: #e0e7ff;
        }
        .entry-actions {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            margin-top: 2rem;
        }
        .entry-action {
            flex: 1;
            border-radius: 9999px;
            border: 1px solid rgba(199, 210, 254, 0.6);
            padding: 0.75rem 1.5rem;
            text-align: center;
            font-size: 0.875rem;
            font-weight: 600;
            color: #e0e7ff;
            text-decoration: none;
            transition: border-color 0.2s, color 0.2s;
        }
        .entry-action:hover {
            border-color: #fff;
            color: #fff;
        }
        @media (max-width: 900px) {
            .pillar-grid,
            .build-grid,
            .architecture-grid,
            .highlight-grid,
            .entry-grid {
                grid-template-columns: 1fr;
            }
            .home section {
                padding: 4rem 1.5rem;
            }
        }
    "#;

    html! {
        <main class="home">
            <style>{home_css}</style>
            <ScrollTop />
            <PageAnimations />
            <Hero />

            <section data-fade="">
                <div class="section-inner section-head">
                    <p class="section-tag">{"Platform-first"}</p>
                    <h2 class="section-title">{"Lunaris is a multimedia platform, not a finished product."}</h2>
                    <p class="section-lead">
                        {"Think VSCode for creative software. Install or write plugins to \
                          assemble the exact workflow you need: timelines, MIDI, simulation \
                          kernels, or a brand new domain entirely. The minimal core stays \
                          stable so plugins can evolve quickly."}
                    </p>
                    <div class="pillar-grid">
                        {
                            PILLARS.iter().map(|(label, copy)| html! {
                                <div class="pillar" key={*label}>
                                    <p class="pillar-label">{*label}</p>
                                    <p>{*copy}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section data-fade="">
                <div class="section-inner wide">
                    <div class="section-head">
                        <p class="section-tag accent">{"What you can build"}</p>
                        <h2 class="section-title">{"Add plugins and Lunaris becomes the tool you need."}</h2>
                        <p class="section-lead">
                            {"Start from the minimal kernel, then mix and match plugins for \
                              your use case."}
                        </p>
                    </div>
                    <div class="build-grid">
                        {
                            BUILDS.iter().map(|build| html! {
                                <div class="build-card" key={build.title}>
                                    <h3>{build.title}</h3>
                                    <p>{build.description}</p>
                                    <ul>
                                        { for build.plugins.iter().map(|plugin| html! {
                                            <li key={*plugin}>{*plugin}</li>
                                        }) }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section data-fade="">
                <div class="section-inner wide architecture-grid">
                    <div>
                        <p class="section-tag">{"How it works"}</p>
                        <h2 class="section-title">{"A microkernel with plugins that define every capability."}</h2>
                        <p class="section-lead">
                            {"The Lunaris core only boots the engine, schedules jobs, and \
                              exposes GPU/device access. Everything else\u{2014}UI, tools, \
                              codecs, physics\u{2014}lives in plugins so you can swap \
                              implementations or keep experimental forks side-by-side."}
                        </p>
                        <div class="arch-points">
                            {
                                ARCHITECTURE_POINTS.iter().map(|point| html! {
                                    <div class="arch-point" key={point.title}>
                                        <h3>{point.title}</h3>
                                        <p>{point.detail}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="snippet-panel">
                        <div class="snippet-head">
                            <span>{"Plugin registration"}</span>
                            <span>{"Rust"}</span>
                        </div>
                        <pre><code>{PLUGIN_SNIPPET}</code></pre>
                    </div>
                </div>
            </section>

            <section data-fade="">
                <div class="section-inner section-head">
                    <p class="section-tag accent">{"For developers"}</p>
                    <h2 class="section-title">{"Built for systems programmers who care about extensibility."}</h2>
                    <div class="highlight-grid">
                        {
                            DEVELOPER_HIGHLIGHTS.iter().map(|point| html! {
                                <div class="highlight-card" key={*point}>
                                    <div class="bar"></div>
                                    <p>{*point}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section data-fade="">
                <div class="section-inner section-head">
                    <p class="section-tag">{"Get started"}</p>
                    <h2 class="section-title">{"Choose your entry point."}</h2>
                </div>
                <div class="entry-grid">
                    {
                        ENTRY_POINTS.iter().map(|card| html! {
                            <div class="entry-card" key={card.title}>
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                                <div class="entry-actions">
                                    { for card.actions.iter().map(|(label, href)| html! {
                                        <a href={*href} class="entry-action" key={*label}>{*label}</a>
                                    }) }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </main>
    }
}
