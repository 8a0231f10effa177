// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! The Usabilla API resource tree.
//!
//! Resources are addressed by their dotted name, for example
//! `websites.button.feedback`. Grouping nodes like `websites` have no
//! endpoint of their own.

/// One node of the resource tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Name of this node, unique among its siblings.
    pub name: &'static str,
    /// Path template, possibly holding an `:id` placeholder.
    pub path_template: Option<&'static str>,
    /// Nested resources.
    pub children: &'static [Resource],
}

impl Resource {
    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&'static Resource> {
        self.children.iter().find(|r| r.name == name)
    }

    /// Whether the path template needs an id.
    pub fn requires_id(&self) -> bool {
        self.path_template.is_some_and(|path| path.contains(":id"))
    }
}

const fn leaf(name: &'static str, path_template: &'static str) -> Resource {
    Resource {
        name,
        path_template: Some(path_template),
        children: &[],
    }
}

/// All resources exposed by the Usabilla API.
pub static RESOURCES: &[Resource] = &[
    Resource {
        name: "websites",
        path_template: None,
        children: &[
            Resource {
                name: "button",
                path_template: Some("/live/websites/button"),
                children: &[leaf("feedback", "/live/websites/button/:id/feedback")],
            },
            Resource {
                name: "campaign",
                path_template: Some("/live/websites/campaign"),
                children: &[
                    leaf("results", "/live/websites/campaign/:id/results"),
                    leaf("stats", "/live/websites/campaign/:id/stats"),
                ],
            },
            Resource {
                name: "inpage",
                path_template: Some("/live/websites/inpage"),
                children: &[leaf("feedback", "/live/websites/inpage/:id/feedback")],
            },
        ],
    },
    Resource {
        name: "email",
        path_template: None,
        children: &[Resource {
            name: "button",
            path_template: Some("/live/email/button"),
            children: &[leaf("feedback", "/live/email/button/:id/feedback")],
        }],
    },
    Resource {
        name: "apps",
        path_template: Some("/live/apps"),
        children: &[
            leaf("feedback", "/live/apps/:id/feedback"),
            Resource {
                name: "campaign",
                path_template: Some("/live/apps/campaign"),
                children: &[leaf("results", "/live/apps/campaign/:id/results")],
            },
        ],
    },
];

/// Look up a resource by its dotted name.
///
/// ```
/// let feedback = usblsign::resource::lookup("websites.button.feedback").unwrap();
/// assert_eq!(feedback.path_template, Some("/live/websites/button/:id/feedback"));
/// ```
pub fn lookup(name: &str) -> Option<&'static Resource> {
    let mut segments = name.split('.');
    let first = segments.next()?;
    let mut node = RESOURCES.iter().find(|r| r.name == first)?;
    for segment in segments {
        node = node.child(segment)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn walk(
        prefix: &str,
        nodes: &'static [Resource],
        out: &mut Vec<(String, &'static Resource)>,
    ) {
        for node in nodes {
            let name = if prefix.is_empty() {
                node.name.to_string()
            } else {
                format!("{prefix}.{}", node.name)
            };
            out.push((name.clone(), node));
            walk(&name, node.children, out);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            lookup("apps.campaign.results").and_then(|r| r.path_template),
            Some("/live/apps/campaign/:id/results")
        );
        assert_eq!(
            lookup("websites.campaign.stats").and_then(|r| r.path_template),
            Some("/live/websites/campaign/:id/stats")
        );
        assert_eq!(lookup("apps").and_then(|r| r.path_template), Some("/live/apps"));
        assert_eq!(lookup("websites").and_then(|r| r.path_template), None);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("").is_none());
        assert!(lookup("websites.unknown").is_none());
        assert!(lookup("websites.button.feedback.more").is_none());
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        let mut all = Vec::new();
        walk("", RESOURCES, &mut all);

        assert_eq!(all.len(), 15);
        for (name, node) in all {
            assert_eq!(lookup(&name), Some(node), "{name}");
        }
    }

    #[test]
    fn test_templates_live_under_live_prefix() {
        let mut all = Vec::new();
        walk("", RESOURCES, &mut all);

        for (name, node) in all {
            if let Some(path) = node.path_template {
                assert!(path.starts_with("/live/"), "{name}: {path}");
                assert_eq!(node.requires_id(), node.children.is_empty(), "{name}");
            }
        }
    }
}
