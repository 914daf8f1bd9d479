mod contact;
mod operation;
