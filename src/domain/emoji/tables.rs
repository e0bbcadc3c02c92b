//! Static emoji lookup tables.

pub(super) const SYMLINK: &str = "🔗";
pub(super) const SYMLINK_DIR: &str = "🔗📁";
pub(super) const DIRECTORY: &str = "📁";
pub(super) const HIDDEN: &str = "⚙️";
pub(super) const EXECUTABLE: &str = "💾";
pub(super) const TEXT: &str = "📝";
pub(super) const UNKNOWN: &str = "❓";
pub(super) const DEVICE: &str = "🔧";

/// Exact file names.
pub(super) const FILE_NAMES: &[(&str, &str)] = &[
    ("vmlinuz", "🐧"),
    ("grub", "🥾"),
    ("shadow", "🕶️"),
    ("fstab", "⬜"),
    ("Makefile", "🧰"),
    ("Makefile.am", "🏭"),
    ("configure.ac", "🏭"),
    ("CMakeLists.txt", "🏭"),
    ("meson.build", "🏭"),
    (".gitignore", "🙈"),
    (".dockerignore", "🙈"),
    (".hgignore", "🙈"),
    (".npmignore", "🙈"),
    (".bzrignore", "🙈"),
    (".eslintignore", "🙈"),
    (".terraformignore", "🙈"),
    (".prettierignore", "🙈"),
    (".p4ignore", "🙈"),
    ("Dockerfile", "🐳"),
    (".gitlab-ci.yml", "🦊"),
    (".travis.yml", "⛑️"),
    ("swagger.yaml", "🧣"),
    ("Jenkinsfile", "🔴"),
    ("tags", "🏷️"),
    ("LICENSE", "⚖️"),
    (".ninja_deps", "🥷"),
    (".ninja_log", "🥷"),
];

/// Extensions, matched case-insensitively.
pub(super) const EXTENSIONS: &[(&str, &str)] = &[
    // documents and media
    ("md", "📑"),
    ("jpg", "📸"),
    ("jpeg", "📸"),
    ("png", "📸"),
    ("gif", "📸"),
    ("bmp", "📸"),
    ("svg", "📸"),
    ("webp", "📸"),
    ("mp4", "🎬"),
    ("avi", "🎬"),
    ("mkv", "🎬"),
    ("mov", "🎬"),
    ("flv", "🎬"),
    ("wmv", "🎬"),
    ("webm", "🎬"),
    ("mp3", "🎧"),
    ("wav", "🎧"),
    ("ogg", "🎧"),
    ("flac", "🎧"),
    ("m4a", "🎧"),
    ("aac", "🎧"),
    ("txt", "📝"),
    ("rst", "📝"),
    ("log", "🪵"),
    ("ttf", "🔤"),
    ("otf", "🔤"),
    ("woff", "🔤"),
    ("woff2", "🔤"),
    ("pdf", "📚"),
    ("djvu", "📚"),
    ("epub", "📚"),
    ("csv", "📊"),
    ("doc", "📄"),
    ("docx", "📄"),
    ("odt", "📄"),
    ("rtf", "📄"),
    ("xls", "📄"),
    ("xlsx", "📄"),
    ("ods", "📄"),
    ("ppt", "📄"),
    ("pptx", "📄"),
    ("odp", "📄"),
    ("mermaid", "🌊"),
    ("plantuml", "🌱"),
    ("dot", "📍"),
    ("drawio", "📉"),
    ("blend", "🧈"),
    // archives and images
    ("zip", "📦"),
    ("tar", "📦"),
    ("gz", "📦"),
    ("bz2", "📦"),
    ("xz", "📦"),
    ("7z", "📦"),
    ("rar", "📦"),
    ("pkg", "📦"),
    ("deb", "📥"),
    ("rpm", "📥"),
    ("torrent", "🌊"),
    ("iso", "💽"),
    ("img", "💽"),
    ("qcow", "🐮"),
    ("qcow2", "🐮"),
    ("vv", "🕹️"),
    ("dmg", "💿"),
    ("apk", "📱"),
    ("app", "📱"),
    ("ipa", "📲"),
    // source code
    ("py", "🐍"),
    ("sh", "🐚"),
    ("bash", "💰"),
    ("zsh", "🆉"),
    ("fish", "🐟"),
    ("js", "💻"),
    ("jsx", "💻"),
    ("ts", "🅃"),
    ("tsx", "💻"),
    ("html", "🌐"),
    ("css", "🎨"),
    ("c", "🔬"),
    ("cpp", "🔬"),
    ("h", "🧢"),
    ("hpp", "🧢"),
    ("java", "☕"),
    ("class", "☕"),
    ("coffee", "☕"),
    ("go", "🐹"),
    ("mod", "🐹"),
    ("rb", "♦️"),
    ("gem", "💎"),
    ("rs", "🦀"),
    ("php", "🐘"),
    ("gradle", "🐘"),
    ("kt", "💻"),
    ("scala", "📐"),
    ("swift", "🐦"),
    ("vue", "🟩"),
    ("dart", "🦋"),
    ("lua", "💻"),
    ("pl", "🐪"),
    ("r", "📈"),
    ("m", "💻"),
    ("mm", "💻"),
    ("asm", "💻"),
    ("s", "💻"),
    ("f", "🅵"),
    ("f90", "🅵"),
    ("lisp", "λ"),
    ("cl", "λ"),
    ("lsp", "λ"),
    ("hs", "💻"),
    ("lhs", "💻"),
    ("ml", "Ⓜ️"),
    ("clj", "💻"),
    ("groovy", "💻"),
    ("jl", "💻"),
    ("ex", "💻"),
    ("exs", "💻"),
    ("elm", "💻"),
    ("d", "🅳"),
    ("cs", "💻"),
    ("vb", "💻"),
    ("fs", "💻"),
    ("sql", "🗄️"),
    ("db", "🗄️"),
    ("pas", "🏫"),
    ("cob", "💻"),
    ("ada", "✈️"),
    ("adb", "✈️"),
    ("ads", "✈️"),
    ("vim", "🖖"),
    ("o", "🧩"),
    ("ko", "🌰"),
    ("part", "🧩"),
    ("patch", "🩹"),
    ("diff", "🆚"),
    ("tf", "🏗️"),
    // build and config
    ("cmake", "🏭"),
    ("ninja", "🥷"),
    ("mvn", "🏹"),
    ("conf", "⚙️"),
    ("config", "⚙️"),
    ("toml", "⚙️"),
    ("cfg", "⚙️"),
    ("ini", "⚙️"),
    ("yaml", "🅈"),
    ("yml", "🅈"),
    ("json", "🏝️"),
    ("lock", "🔒"),
    ("rc", "👟"),
    ("env", "🌍"),
    ("desktop", "🖥️"),
    ("cron", "📅"),
    ("target", "🎯"),
    ("service", "🚀"),
    ("socket", "🔌"),
    ("sock", "🧦"),
    // keys
    ("pem", "🔑"),
    ("crt", "🔑"),
    ("key", "🔑"),
    ("pub", "🔑"),
    ("p12", "🔑"),
    // apple
    ("plist", "📋"),
    ("pb", "📋"),
    ("scpt", "📜"),
    ("xcodeproj", "🛠️"),
    ("mlmodel", "🧠"),
    ("arobject", "🎭"),
    ("sks", "🎮"),
    ("car", "🚗"),
    ("xcassets", "🗂️"),
    ("dSYM", "🐛"),
    ("terminal", "🖥️"),
    ("webloc", "🔗"),
    ("workflow", "🔄"),
    ("bundle", "🎁"),
    ("ccl", "🎨"),
    ("xib", "🖼️"),
    ("icns", "🖼️"),
    ("framework", "🏗️"),
    ("playground", "🎠"),
    // runtime leftovers
    ("tmp", "⏳"),
    ("bak", "🔙"),
    ("cache", "⏱️"),
    ("bin", "💾"),
    ("pid", "🪪"),
    ("swap", "🔄"),
];

/// Interpreter lines, matched as prefixes of the first line of a file.
pub(super) const SHEBANGS: &[(&str, &str)] = &[
    ("#!/bin/sh", "🐚"),
    ("#!/usr/bin/sh", "🐚"),
    ("#!/usr/bin/env sh", "🐚"),
    ("#!/bin/bash", "💰"),
    ("#!/usr/bin/bash", "💰"),
    ("#!/usr/bin/env bash", "💰"),
    ("#!/bin/dash", "🐚"),
    ("#!/usr/bin/dash", "🐚"),
    ("#!/usr/bin/env dash", "🐚"),
    ("#!/bin/zsh", "🆉"),
    ("#!/usr/bin/zsh", "🆉"),
    ("#!/usr/bin/env zsh", "🆉"),
    ("#!/bin/ksh", "🐚"),
    ("#!/usr/bin/ksh", "🐚"),
    ("#!/usr/bin/env ksh", "🐚"),
    ("#!/usr/bin/perl", "🐪"),
    ("#!/usr/bin/perl5", "🐪"),
    ("#!/usr/local/bin/perl", "🐪"),
    ("#!/usr/bin/env perl", "🐪"),
    ("#!/usr/bin/env perl5", "🐪"),
    ("#!/opt/bin/perl", "🐪"),
    ("#!/bin/ruby", "♦️"),
    ("#!/usr/bin/ruby", "♦️"),
    ("#!/usr/local/bin/ruby", "♦️"),
    ("#!/usr/bin/env ruby", "♦️"),
    ("#!/opt/local/bin/ruby", "♦️"),
    ("#!/usr/bin/python", "🐍"),
    ("#!/usr/bin/python2", "🐍"),
    ("#!/usr/bin/python3", "🐍"),
    ("#!/usr/local/bin/python", "🐍"),
    ("#!/usr/bin/env python", "🐍"),
    ("#!/usr/bin/env python2", "🐍"),
    ("#!/usr/bin/env python3", "🐍"),
    ("#!/usr/bin/lua", "🌙"),
    ("#!/usr/local/bin/lua", "🌙"),
    ("#!/usr/bin/env lua", "🌙"),
    ("#!/usr/bin/tcl", "☯️"),
    ("#!/usr/local/bin/tcl", "☯️"),
    ("#!/usr/bin/env tcl", "☯️"),
    ("#!/usr/bin/awk", "🐦"),
    ("#!/usr/local/bin/awk", "🐦"),
    ("#!/usr/bin/env awk", "🐦"),
    ("#!/usr/bin/gawk", "🐦"),
    ("#!/usr/bin/env gawk", "🐦"),
    ("#!/usr/bin/node", "💚"),
    ("#!/usr/local/bin/node", "💚"),
    ("#!/usr/bin/env node", "💚"),
    ("#!/usr/bin/nodejs", "💚"),
    ("#!/usr/bin/env nodejs", "💚"),
    ("#!/usr/bin/php", "🐘"),
    ("#!/usr/local/bin/php", "🐘"),
    ("#!/usr/bin/env php", "🐘"),
    ("#!/usr/bin/fish", "🐟"),
    ("#!/usr/local/bin/fish", "🐟"),
    ("#!/usr/bin/env fish", "🐟"),
];

/// Exact device names under `/dev`.
pub(super) const DEVICE_NAMES: &[(&str, &str)] = &[
    ("loop", "🔁"),
    ("null", "🕳️"),
    ("zero", "🕳️"),
    ("random", "🎲"),
    ("urandom", "🎲"),
    ("tty", "🖥️"),
    ("usb", "🔌"),
    ("vga_arbiter", "🖼️"),
    ("vhci", "🔌"),
    ("vhost-net", "🌐"),
    ("vhost-vsock", "💬"),
    ("mcelog", "📋"),
    ("media0", "🎬"),
    ("mei0", "🧠"),
    ("mem", "🗄️"),
    ("hpet", "⏱️"),
    ("hwrng", "🎲"),
    ("kmsg", "📜"),
    ("kvm", "🌰"),
    ("zram", "🗜️"),
    ("udmabuf", "🔄"),
    ("uhid", "🕹️"),
    ("rfkill", "📡"),
    ("ppp", "🌐"),
    ("ptmx", "🖥️"),
    ("userfaultfd", "🚧"),
    ("nvram", "🗄️"),
    ("port", "🔌"),
    ("autofs", "🚗"),
    ("btrfs-control", "🌳"),
    ("console", "🖥️"),
    ("full", "🔒"),
    ("fuse", "🔥"),
    ("gpiochip0", "📌"),
    ("cuse", "🧩"),
    ("cpu_dma_latency", "⏱️"),
];

/// Device name prefixes under `/dev`, checked after [`DEVICE_NAMES`].
pub(super) const DEVICE_PREFIXES: &[(&str, &str)] = &[
    ("loop", "🔁"),
    ("sd", "💽"),
    ("tty", "🖥️"),
    ("usb", "🔌"),
    ("video", "🎥"),
    ("nvme", "💽"),
    ("lp", "🖨️"),
    ("hidraw", "🔠"),
    ("vcs", "📟"),
    ("ptp", "🕰️"),
    ("rtc", "🕰️"),
    ("watchdog", "🐕"),
    ("mtd", "⚡"),
];
