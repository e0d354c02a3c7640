use super::{
    Footer, LocaleDescriptor, Logo, SidebarTemplate, SidebarTemplateEntry, SocialLink, group,
    page,
};

pub(super) fn descriptor() -> LocaleDescriptor {
    LocaleDescriptor {
        code: "en".to_owned(),
        label: "English".to_owned(),
        lang: "en-US".to_owned(),
        title: "Docsite".to_owned(),
        description: "Versioned, multi-locale documentation built from a single manifest"
            .to_owned(),
        logo: Logo {
            src: "/logo.svg".to_owned(),
            alt: "Docsite logo".to_owned(),
        },
        social_links: vec![SocialLink {
            icon: "github".to_owned(),
            link: "https://github.com/docsite-dev/docsite".to_owned(),
        }],
        footer: Footer {
            message: "Released under the MIT License.".to_owned(),
            copyright: "Copyright © 2024-present Docsite contributors".to_owned(),
        },
        sidebar: SidebarTemplate {
            groups: vec![
                group(
                    "Getting Started",
                    None,
                    vec![
                        page("Introduction", ""),
                        page("Installation", "installation"),
                        page("Quick Start", "quick-start"),
                    ],
                ),
                group(
                    "Guide",
                    Some(false),
                    vec![
                        page("Configuration", "guide/configuration"),
                        page("Version Manifest", "guide/manifest"),
                        page("Locales", "guide/locales"),
                        page("Sidebar", "guide/sidebar"),
                    ],
                ),
                group(
                    "Reference",
                    Some(true),
                    vec![
                        page("Command Line", "reference/cli"),
                        page("Configuration File", "reference/config"),
                        SidebarTemplateEntry::Group(group(
                            "Output",
                            Some(true),
                            vec![
                                page("Site Config", "reference/output/site-config"),
                                page("Head Tags", "reference/output/head"),
                            ],
                        )),
                    ],
                ),
            ],
        },
    }
}
