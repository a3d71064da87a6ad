use crate::filesystem::{Directory, File};

/// Builds the sample tree shown when no description file is given.
pub fn demo_tree() -> Directory {
    let mut root = Directory::new("/");
    root.add_item(Directory::new("bin"));
    root.add_item(Directory::new("home"));
    root.add_item(File::new("image1", "png", 20));

    if let Some(home) = root.navigate_to("home") {
        let tim = home.add_directory("tim");
        tim.add_item(File::new("info", "txt", 100));
        tim.add_item(File::empty("data", "in"));
        tim.add_item(Directory::new("data"));
    }
    if let Some(bin) = root.navigate_to("bin") {
        bin.add_item(File::new("program", "exe", 450));
    }

    root
}
