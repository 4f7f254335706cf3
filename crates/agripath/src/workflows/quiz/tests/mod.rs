mod common;
mod draft;
mod routing;
