mod scripted;
mod transport;
