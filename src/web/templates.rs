//! # Templates Maud — HTML Server-Side Rendering
//!
//! A página inteira é montada com o macro [`maud::html!`], direto em código
//! Rust. O estado de UI ([`PageView`]) entra como parâmetro e sai embutido
//! nos links. O servidor não guarda nada entre requisições.
//!
//! ## Filosofia: HTMX + Maud = Hypermedia-Driven
//!
//! - Cada card e cada aba é um `<a>` com `href` (navegação completa, funciona
//!   sem JavaScript) **e** `hx-get` (troca só o fragmento via HTMX)
//! - Os fragmentos [`architecture_list()`] e [`application_tabs()`] têm id
//!   fixo e são trocados com `hx-swap="outerHTML"`
//!
//! ## Layout (`full_page`)
//!
//! ```text
//! ┌──────────────── nav-bar ─────────────────────┐
//! │ Título │ Технологии │ Применение │ ... │      │
//! ├──────────────────────────────────────────────┤
//! │ hero: texto + imagem                         │
//! │ #tech          → #architecture-list (2×2)    │
//! │ #applications  → #application-tabs          │
//! │ #research      → 4 cards de artigos          │
//! │ #future        → 4 barras + card de ética    │
//! ├──────────────────────────────────────────────┤
//! │ footer                                       │
//! └──────────────────────────────────────────────┘
//! ```

use maud::{html, Markup, DOCTYPE};

use crate::content::catalog::{Ethics, Hero};
use crate::content::records::{ImageRef, SectionHeader};
use crate::content::{ArchitectureRecord, Catalog, FutureDirectionRecord, Progress};
use crate::ui::{ExpandedCard, IconResolver, Tab};

/// CDN do HTMX. Sem ele, os links fazem navegação completa.
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Estado de UI de uma página aberta, vindo da query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    pub expanded: ExpandedCard,
    pub tab: Tab,
}

impl PageView {
    /// Query string sem `?`, omitindo valores padrão.
    pub fn query(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(index) = self.expanded.index() {
            parts.push(format!("expanded={index}"));
        }
        if self.tab != Tab::default() {
            parts.push(format!("tab={}", self.tab.slug()));
        }
        parts.join("&")
    }

    /// URL da página completa neste estado.
    pub fn href(&self) -> String {
        with_query("/", &self.query())
    }
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Página completa.
pub fn full_page(catalog: &Catalog, icons: &dyn IconResolver, view: PageView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (catalog.site_title) }
                link rel="stylesheet" href="/assets/style.css";
                script src=(HTMX_SRC) {}
            }
            body {
                (nav_bar(catalog))

                main class="page" {
                    (hero(&catalog.hero, icons))

                    section id=(catalog.architectures_header.anchor) class="section section-tinted" {
                        div class="container" {
                            (section_header(&catalog.architectures_header))
                            (architecture_list(catalog, icons, view))
                        }
                    }

                    section id=(catalog.applications_header.anchor) class="section" {
                        div class="container" {
                            (section_header(&catalog.applications_header))
                            (application_tabs(catalog, icons, view))
                        }
                    }

                    section id=(catalog.research_header.anchor) class="section section-tinted" {
                        div class="container" {
                            (section_header(&catalog.research_header))
                            (research_grid(catalog, icons))
                        }
                    }

                    section id=(catalog.future_header.anchor) class="section" {
                        div class="container" {
                            (section_header(&catalog.future_header))
                            (future_grid(catalog, icons))
                            (ethics_card(&catalog.ethics))
                        }
                    }
                }

                footer class="footer" {
                    p { (catalog.footer) }
                }
            }
        }
    }
}

fn nav_bar(catalog: &Catalog) -> Markup {
    html! {
        nav class="nav-bar" {
            div class="container nav-inner" {
                a href="/" class="nav-brand" { (catalog.site_title) }
                div class="nav-links" {
                    @for link in catalog.nav_links {
                        a href=(format!("#{}", link.anchor)) class="nav-link" { (link.label) }
                    }
                }
            }
        }
    }
}

fn hero(hero: &Hero, icons: &dyn IconResolver) -> Markup {
    html! {
        section class="hero" {
            div class="container hero-grid" {
                div class="hero-text" {
                    h1 { (hero.heading) }
                    @for paragraph in hero.paragraphs {
                        p class="lead" { (paragraph) }
                    }
                    a href="#tech" class="cta" {
                        (hero.call_to_action)
                        (icons.resolve("ArrowRight"))
                    }
                }
                (image(&hero.image, "hero-image"))
            }
        }
    }
}

fn image(image: &ImageRef, class: &str) -> Markup {
    html! {
        img src=(image.src) alt=(image.alt) class=(class) loading="lazy";
    }
}

fn section_header(header: &SectionHeader) -> Markup {
    html! {
        div class="section-header" {
            span class="badge" { (header.badge) }
            h2 { (header.heading) }
            @for (i, paragraph) in header.paragraphs.iter().enumerate() {
                p class=(if i == 0 { "section-intro" } else { "section-note" }) { (paragraph) }
            }
        }
    }
}

/// Fragment HTMX da lista de arquiteturas (`#architecture-list`).
///
/// Cada card leva, no `href` e no `hx-get`, o estado que resulta de
/// clicá-lo. Apenas o card expandido renderiza aplicações e características.
pub fn architecture_list(catalog: &Catalog, icons: &dyn IconResolver, view: PageView) -> Markup {
    html! {
        div id="architecture-list" class="card-grid two-columns" {
            @for (index, arch) in catalog.architectures.iter().enumerate() {
                (architecture_card(index, arch, icons, view))
            }
        }
    }
}

fn architecture_card(
    index: usize,
    arch: &ArchitectureRecord,
    icons: &dyn IconResolver,
    view: PageView,
) -> Markup {
    let expanded = view.expanded.is_expanded(index);
    let toggled = PageView {
        expanded: view.expanded.toggle(index),
        ..view
    };
    let toggle_url = with_query(&format!("/architectures/{index}/toggle"), &view.query());

    html! {
        a class=(if expanded { "card arch-card expanded" } else { "card arch-card" })
            href=(format!("{}#tech", toggled.href()))
            hx-get=(toggle_url)
            hx-target="#architecture-list"
            hx-swap="outerHTML"
            aria-expanded=(if expanded { "true" } else { "false" })
            data-index=(index) {
            div class="card-head" {
                div class="icon-box primary" { (icons.resolve(arch.icon)) }
                div class="card-title" {
                    h3 { (arch.title) }
                    p class="muted" { (arch.description) }
                }
            }

            @if expanded {
                div class="arch-details" {
                    div {
                        h4 { "Применение:" }
                        div class="badge-row" {
                            @for application in arch.applications {
                                span class="badge badge-secondary" { (application) }
                            }
                        }
                    }
                    div {
                        h4 { "Ключевые особенности:" }
                        ul class="feature-list" {
                            @for feature in arch.key_features {
                                li class="feature-item" { (feature) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fragment HTMX das abas de aplicações (`#application-tabs`).
///
/// Só o painel ativo é renderizado; os demais não existem no DOM.
pub fn application_tabs(catalog: &Catalog, icons: &dyn IconResolver, view: PageView) -> Markup {
    let expanded_query = PageView {
        tab: Tab::default(),
        ..view
    }
    .query();
    let panel = catalog.panel(view.tab);

    html! {
        div id="application-tabs" class="tabs" {
            div class="tab-list" role="tablist" {
                @for tab in Tab::ALL {
                    @let active = tab == view.tab;
                    a class=(if active { "tab-trigger active" } else { "tab-trigger" })
                        role="tab"
                        aria-selected=(if active { "true" } else { "false" })
                        aria-controls=(format!("panel-{}", tab.slug()))
                        href=(format!("{}#applications", PageView { tab, ..view }.href()))
                        hx-get=(with_query(&format!("/applications/{}", tab.slug()), &expanded_query))
                        hx-target="#application-tabs"
                        hx-swap="outerHTML" {
                        (tab.label())
                    }
                }
            }

            div class="card tab-panel" id=(format!("panel-{}", panel.tab.slug())) role="tabpanel" {
                div class="panel-body" {
                    div class="icon-box secondary large" { (icons.resolve(panel.icon)) }
                    div class="panel-text" {
                        h3 { (panel.title) }
                        p class="muted" { (panel.description) }
                        div class="fact-grid" {
                            @for fact in &panel.facts {
                                div class="fact-cell" {
                                    h4 { (fact.heading) }
                                    p class="muted small" { (fact.body) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn research_grid(catalog: &Catalog, icons: &dyn IconResolver) -> Markup {
    html! {
        div class="card-grid four-columns" {
            @for area in catalog.research_areas {
                div class="card research-card" {
                    div class="icon-box primary" { (icons.resolve(area.icon)) }
                    h3 { (area.title) }
                    ul class="paper-list" {
                        @for paper in area.papers {
                            li class="paper-item" {
                                (icons.resolve("FileText"))
                                (paper)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn future_grid(catalog: &Catalog, icons: &dyn IconResolver) -> Markup {
    html! {
        div class="card-grid two-columns" {
            @for direction in catalog.future_directions {
                (future_card(direction, icons))
            }
        }
    }
}

fn future_card(direction: &FutureDirectionRecord, icons: &dyn IconResolver) -> Markup {
    html! {
        div class="card future-card" {
            div class="card-head" {
                div class="icon-box secondary" { (icons.resolve(direction.icon)) }
                div class="card-title" {
                    h3 { (direction.title) }
                    p class="muted" { (direction.description) }
                    (progress_bar(direction.progress))
                }
            }
        }
    }
}

/// Barra horizontal cuja fração preenchida é `progress / 100`.
pub fn progress_bar(progress: Progress) -> Markup {
    html! {
        div class="progress" {
            div class="progress-caption" {
                span { "Стадия развития" }
                span { (progress.percent()) "%" }
            }
            div class="progress-track" {
                div class="progress-fill"
                    style=(progress.css_width())
                    data-progress=(progress.percent()) {}
            }
        }
    }
}

fn ethics_card(ethics: &Ethics) -> Markup {
    html! {
        div class="card ethics-card" {
            div class="ethics-grid" {
                div {
                    h3 { (ethics.heading) }
                    p class="muted" { (ethics.intro) }
                    ul class="challenge-list" {
                        @for challenge in ethics.challenges {
                            li { span class="dot" {} span { (challenge) } }
                        }
                    }
                }
                (image(&ethics.image, "ethics-image"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATALOG;
    use crate::ui::GlyphIcons;

    fn view(expanded: ExpandedCard, tab: Tab) -> PageView {
        PageView { expanded, tab }
    }

    /// Valores padrão não aparecem na URL
    #[test]
    fn test_href_omits_defaults() {
        assert_eq!(PageView::default().href(), "/");
        assert_eq!(
            view(ExpandedCard::Expanded(2), Tab::Vision).href(),
            "/?expanded=2"
        );
        assert_eq!(
            view(ExpandedCard::Expanded(1), Tab::Nlp).href(),
            "/?expanded=1&tab=nlp"
        );
        assert_eq!(view(ExpandedCard::Collapsed, Tab::Robotics).href(), "/?tab=robotics");
    }

    /// Expandir o card i mostra exatamente suas aplicações e características, em ordem
    #[test]
    fn test_expanded_card_reveals_details_in_order() {
        for (i, arch) in CATALOG.architectures.iter().enumerate() {
            let html = architecture_list(
                &CATALOG,
                &GlyphIcons,
                view(ExpandedCard::Expanded(i), Tab::Vision),
            )
            .into_string();

            assert_eq!(html.matches(r#"class="badge badge-secondary""#).count(), arch.applications.len());
            assert_eq!(html.matches(r#"class="feature-item""#).count(), arch.key_features.len());
            assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);

            let positions: Vec<usize> = arch
                .applications
                .iter()
                .chain(arch.key_features)
                .map(|text| html.find(text).expect("item ausente"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Recolhido, nenhum card mostra detalhes
    #[test]
    fn test_collapsed_list_has_no_details() {
        let html = architecture_list(&CATALOG, &GlyphIcons, PageView::default()).into_string();
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), CATALOG.architectures.len());
        assert!(!html.contains("arch-details"));
    }

    /// Os links de cada card apontam para o estado alternado
    #[test]
    fn test_card_links_carry_toggled_state() {
        let html = architecture_list(
            &CATALOG,
            &GlyphIcons,
            view(ExpandedCard::Expanded(1), Tab::Nlp),
        )
        .into_string();
        // card 1 recolhe, card 0 troca a seleção
        assert!(html.contains(r#"href="/?tab=nlp#tech""#));
        assert!(html.contains(r#"href="/?expanded=0&amp;tab=nlp#tech""#));
        assert!(html.contains(r#"hx-get="/architectures/0/toggle?expanded=1&amp;tab=nlp""#));
    }

    /// Apenas o painel ativo é renderizado
    #[test]
    fn test_only_active_panel_rendered() {
        for active in Tab::ALL {
            let html = application_tabs(&CATALOG, &GlyphIcons, view(ExpandedCard::Collapsed, active))
                .into_string();
            for tab in Tab::ALL {
                let panel = CATALOG.panel(tab);
                assert_eq!(html.contains(panel.description), tab == active);
            }
            assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
            assert_eq!(html.matches(r#"class="fact-cell""#).count(), 2);
        }
    }

    /// A largura do preenchimento é proporcional ao progresso
    #[test]
    fn test_progress_bar_width() {
        let html = progress_bar(Progress::new(40)).into_string();
        assert!(html.contains(r#"style="width: 40%""#));
        assert!(html.contains("40%"));
    }

    /// A página completa contém todas as seções e a aba inicial
    #[test]
    fn test_full_page_sections() {
        let html = full_page(&CATALOG, &GlyphIcons, PageView::default()).into_string();
        for anchor in ["tech", "applications", "research", "future"] {
            assert!(html.contains(&format!(r#"id="{anchor}""#)));
        }
        assert!(html.contains(CATALOG.panel(Tab::Vision).description));
        assert!(html.contains(CATALOG.hero.image.src));
        assert!(html.contains(r#"alt="AI Ethics""#));
        assert!(html.contains(CATALOG.footer));
        for direction in CATALOG.future_directions {
            assert!(html.contains(&direction.progress.css_width()));
        }
        for area in CATALOG.research_areas {
            for paper in area.papers {
                assert!(html.contains(paper));
            }
        }
    }
}
