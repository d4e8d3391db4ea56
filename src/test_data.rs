#[cfg(test)]
pub const POST_HELLO: &str = r##"---
title: Hello
publishDate: 2024-01-01
description: First post
tags:
  - Go
  - Web Dev
---

# Hello

Hello there, this is the first post.
"##;

#[cfg(test)]
pub const POST_WORLD: &str = r##"---
title: World
publishDate: 2024-06-01
---

Second post, no tags and no description.
"##;

#[cfg(test)]
pub const POST_NO_DATE: &str = r##"---
title: Dateless
description: Someone forgot the date
---

Body.
"##;

#[cfg(test)]
pub const POST_NO_FRONT_MATTER: &str = r##"# Just markdown

Nothing on top.
"##;

#[cfg(test)]
pub const POST_EMPTY_BODY: &str = r##"---
title: Empty
publishDate: 2024-03-01T12:00:00Z
description: Only a description
tags: [Rust]
---
"##;
