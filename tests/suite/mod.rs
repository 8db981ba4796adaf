mod board;
mod game_flow;
