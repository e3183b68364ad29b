// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page regions.
//!
//! The `App` struct wires together the domains (catalog, localization,
//! preferences, lightbox) and translates messages into side effects like
//! thumbnail fetching or opening the system browser. Policy decisions
//! (window sizing, layout breakpoint handling, link hand-off) stay close
//! to the update loop so user-facing behavior is easy to audit.

use crate::content::Catalog;
use crate::domain::{FontScale, LayoutClass, Lightbox, Section};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ThumbnailCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{bio_header, bio_page, lightbox, project_card, section_tabs, styles, toolbar};
use chrono::Datelike;
use iced::widget::{button, image::Handle, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    event, window, Element, Length, Size, Subscription, Task, Theme,
};
use std::path::PathBuf;
use tracing::warn;

/// Target of the footer's source-code link.
pub const REPOSITORY_URL: &str = "https://github.com/dana-reyes/iced_folio";

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory with replacement catalog documents.
    pub content_dir: Option<PathBuf>,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    SectionSelected(Section),
    /// A card asked to open the lightbox on one of its media entries.
    OpenMedia { item: String, index: usize },
    CloseLightbox,
    /// Hand a URL to the system browser.
    OpenLink(String),
    WindowResized(Size),
    ThumbnailFetched {
        address: String,
        result: Result<Handle, Error>,
    },
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    section: Section,
    font_scale: FontScale,
    layout: LayoutClass,
    lightbox: Lightbox,
    thumbnails: ThumbnailCache,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the thumbnail prefetch
    /// for every media address the catalog references.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang);
        let catalog = Catalog::load(flags.content_dir.as_deref());

        let mut thumbnails = ThumbnailCache::new();
        let mut addresses = catalog.media_addresses();
        addresses.insert(bio_header::PORTRAIT_ADDRESS.to_owned());

        let mut tasks = Vec::with_capacity(addresses.len());
        for address in addresses {
            thumbnails.mark_loading(&address);
            tasks.push(Task::perform(
                media::thumbnails::fetch(address.clone()),
                move |result| Message::ThumbnailFetched {
                    address: address.clone(),
                    result,
                },
            ));
        }

        let app = App {
            i18n,
            catalog,
            section: Section::default(),
            font_scale: FontScale::default(),
            layout: LayoutClass::classify(WINDOW_DEFAULT_WIDTH),
            lightbox: Lightbox::default(),
            thumbnails,
        };
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(toolbar::Message::LanguageSelected(locale)) => {
                self.i18n.set_locale(locale);
            }
            Message::Toolbar(toolbar::Message::FontScaleSelected(scale)) => {
                self.font_scale = scale;
            }
            Message::SectionSelected(section) => {
                self.section = section;
            }
            Message::OpenMedia { item, index } => match self.catalog.item(&item) {
                Some(content_item) => {
                    if !self.lightbox.open(&item, index, content_item.media.len()) {
                        warn!(item, index, "lightbox open rejected, index out of range");
                    }
                }
                None => warn!(item, "lightbox open rejected, unknown item"),
            },
            Message::CloseLightbox => {
                self.lightbox.close();
            }
            Message::OpenLink(href) => {
                if let Err(err) = webbrowser::open(&href) {
                    warn!(href, %err, "failed to open link in system browser");
                }
            }
            Message::WindowResized(size) => {
                self.layout = LayoutClass::classify(size.width);
            }
            Message::ThumbnailFetched { address, result } => {
                if let Err(err) = &result {
                    warn!(address, %err, "thumbnail fetch failed");
                }
                self.thumbnails.insert(address, result);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let header: Element<'_, Message> = match self.layout {
            LayoutClass::Wide => bio_header::wide(self.header_context()),
            LayoutClass::Narrow => bio_header::narrow(self.header_context()),
        }
        .map(Message::Toolbar);

        let tabs = section_tabs::view(section_tabs::ViewContext {
            i18n: &self.i18n,
            current: self.section,
            font_scale: self.font_scale,
        })
        .map(Message::SectionSelected);

        let body: Element<'_, Message> = match self.section {
            Section::Bio => bio_page::view(bio_page::ViewContext {
                i18n: &self.i18n,
                font_scale: self.font_scale,
            }),
            section => self.cards(section),
        };

        let centered_body = Container::new(
            Container::new(body)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([0.0, spacing::MD]);

        let page = Column::new()
            .push(header)
            .push(tabs)
            .push(scrollable(centered_body).height(Length::Fill))
            .push(self.footer());

        let mut layers = Stack::new().push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        );

        if self.layout == LayoutClass::Wide {
            let floating = Container::new(
                toolbar::view(toolbar::ViewContext {
                    i18n: &self.i18n,
                    font_scale: self.font_scale,
                })
                .map(Message::Toolbar),
            )
            .padding(spacing::SM)
            .style(styles::container::chrome);
            layers = layers.push(
                Container::new(floating)
                    .width(Length::Fill)
                    .align_x(Horizontal::Right)
                    .padding(spacing::MD),
            );
        }

        if let Lightbox::Open { item, index } = &self.lightbox {
            if let Some(content_item) = self.catalog.item(item) {
                layers = layers.push(
                    lightbox::view(
                        content_item,
                        *index,
                        lightbox::ViewContext {
                            i18n: &self.i18n,
                            font_scale: self.font_scale,
                            thumbnails: &self.thumbnails,
                        },
                    )
                    .map(|message| match message {
                        lightbox::Message::Close => Message::CloseLightbox,
                        lightbox::Message::OpenLink(href) => Message::OpenLink(href),
                    }),
                );
            }
        }

        layers.into()
    }

    fn header_context(&self) -> bio_header::ViewContext<'_> {
        bio_header::ViewContext {
            i18n: &self.i18n,
            font_scale: self.font_scale,
            thumbnails: &self.thumbnails,
        }
    }

    /// Card list for the projects or lab tab, in stored order.
    fn cards(&self, section: Section) -> Element<'_, Message> {
        let mut column = Column::new().spacing(spacing::LG);
        for item in self.catalog.items_for(section) {
            let id = item.id.clone();
            let card = project_card::view(
                item,
                project_card::ViewContext {
                    i18n: &self.i18n,
                    font_scale: self.font_scale,
                    thumbnails: &self.thumbnails,
                },
            )
            .map(move |message| match message {
                project_card::Message::OpenMedia(index) => Message::OpenMedia {
                    item: id.clone(),
                    index,
                },
                project_card::Message::OpenLink(href) => Message::OpenLink(href),
            });
            column = column.push(card);
        }
        column.into()
    }

    /// Footer band: copyright pinned left, repository link pinned right.
    fn footer(&self) -> Element<'_, Message> {
        let size = self.font_scale.apply(typography::CAPTION);
        let year = current_year().to_string();
        let row = Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(
                    self.i18n
                        .tr_with_args("footer-copyright", &[("year", &year)]),
                )
                .size(size),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(self.i18n.tr("footer-note")).size(size))
                    .on_press(Message::OpenLink(REPOSITORY_URL.to_owned()))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::accent),
            );

        Container::new(row)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::chrome)
            .into()
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}
