use super::{
    Footer, LocaleDescriptor, Logo, SidebarTemplate, SidebarTemplateEntry, SocialLink, group,
    page,
};

pub(super) fn descriptor() -> LocaleDescriptor {
    LocaleDescriptor {
        code: "zh".to_owned(),
        label: "简体中文".to_owned(),
        lang: "zh-CN".to_owned(),
        title: "Docsite".to_owned(),
        description: "基于单一版本清单构建的多版本、多语言文档".to_owned(),
        logo: Logo {
            src: "/logo.svg".to_owned(),
            alt: "Docsite 标志".to_owned(),
        },
        social_links: vec![SocialLink {
            icon: "github".to_owned(),
            link: "https://github.com/docsite-dev/docsite".to_owned(),
        }],
        footer: Footer {
            message: "基于 MIT 许可发布。".to_owned(),
            copyright: "版权所有 © 2024-至今 Docsite 贡献者".to_owned(),
        },
        sidebar: SidebarTemplate {
            groups: vec![
                group(
                    "快速开始",
                    None,
                    vec![
                        page("简介", ""),
                        page("安装", "installation"),
                        page("快速上手", "quick-start"),
                    ],
                ),
                group(
                    "指南",
                    Some(false),
                    vec![
                        page("配置", "guide/configuration"),
                        page("版本清单", "guide/manifest"),
                        page("多语言", "guide/locales"),
                        page("侧边栏", "guide/sidebar"),
                    ],
                ),
                group(
                    "参考",
                    Some(true),
                    vec![
                        page("命令行", "reference/cli"),
                        page("配置文件", "reference/config"),
                        SidebarTemplateEntry::Group(group(
                            "输出",
                            Some(true),
                            vec![
                                page("站点配置", "reference/output/site-config"),
                                page("Head 标签", "reference/output/head"),
                            ],
                        )),
                    ],
                ),
            ],
        },
    }
}
