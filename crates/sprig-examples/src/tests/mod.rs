mod bindings;
mod hiernav;
mod lineedit;
mod temperature;
mod wizard;
mod wrapper;
