mod root;
mod secret;
mod verify_link;
